use crate::models::Body;
use crate::{Result, loader};
use colored::*;
use std::path::Path;

pub fn execute_list(collection_path: &Path) -> Result<()> {
    println!("{}", "Loading collection...".bright_blue());
    println!("  Path: {}", collection_path.display());

    let collection = loader::load_collection(collection_path)?;

    println!("\n{}", "✓ Collection loaded successfully".green());
    if let Some(ref name) = collection.name {
        println!("  Name: {}", name.bold());
    }
    println!("  Variables: {}", collection.variables.len());
    println!();

    if collection.transactions.is_empty() {
        println!("{}", "No requests found".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Requests ({}):", collection.transactions.len()).bold()
    );
    for (idx, transaction) in collection.transactions.iter().enumerate() {
        println!();
        println!(
            "  {}. {} {}",
            idx + 1,
            transaction.method.bright_cyan(),
            transaction.url.bold()
        );
        println!("     Name: {}", transaction.name);

        if !transaction.headers.is_empty() {
            println!("     Headers: {}", transaction.headers.len());
        }

        match &transaction.body {
            Body::None => {}
            Body::Raw(text) => println!("     Body: raw ({} bytes)", text.len()),
            Body::Form(fields) | Body::UrlEncoded(fields) => println!(
                "     Body: {} ({} fields)",
                transaction.body.kind().bright_yellow(),
                fields.len()
            ),
        }
    }

    Ok(())
}
