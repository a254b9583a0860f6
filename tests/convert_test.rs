use collection2k6::{ConvertOptions, convert_file};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(name)
}

fn convert(name: &str, options: ConvertOptions) -> String {
    convert_file(fixture(name), &options).unwrap()
}

/// Script skeleton shared by every collection without a data file
fn script(scope: &str, statement: &str) -> String {
    format!(
        r#"// Auto-generated by the Load Impact converter

import "./postman-shim.js";
import http from "k6/http";

export let options = {{ maxRedirects: 4 }};

const Scope = Symbol.for("scope");
const Var = Symbol.for("variable");
{scope}

export default function() {{
  let res;

  {statement}
}}
"#
    )
}

#[test]
fn convert_minimal_collection() {
    let result = convert("minimal.json", ConvertOptions::default());
    assert_eq!(result, "// No HTTP/HTTPS transactions have been recorded");
}

#[test]
fn convert_minimal_collection_ignores_variable_sources() {
    let options = ConvertOptions {
        globals: Some(fixture("globals.json")),
        csv: Some(fixture("data-csv.csv")),
        ..Default::default()
    };
    let result = convert("minimal.json", options);
    assert_eq!(result, "// No HTTP/HTTPS transactions have been recorded");
}

#[test]
fn convert_request() {
    let result = convert("request.json", ConvertOptions::default());
    assert_eq!(
        result,
        script("postman[Scope]();", r#"res = http.get("http://example.com");"#)
    );
}

#[test]
fn convert_raw_body() {
    let result = convert("body-raw.json", ConvertOptions::default());
    assert_eq!(
        result,
        script(
            "postman[Scope]();",
            r#"res = http.post("http://example.com", "line1\nline2\nline3\n");"#
        )
    );
}

#[test]
fn convert_form_body() {
    let result = convert("body-form.json", ConvertOptions::default());
    assert_eq!(
        result,
        script(
            "postman[Scope]();",
            r#"res = http.post("http://example.com", {
    first: "one",
    second: "two",
    third: "three"
  });"#
        )
    );
}

#[test]
fn convert_url_body() {
    let result = convert("body-url.json", ConvertOptions::default());
    assert_eq!(
        result,
        script(
            "postman[Scope]();",
            r#"res = http.post(
    "http://example.com",
    { first: "one", second: "two", third: "three" },
    {
      headers: {
        "Content-Type": "application/x-www-form-urlencoded"
      }
    }
  );"#
        )
    );
}

#[test]
fn convert_var_global() {
    let options = ConvertOptions {
        globals: Some(fixture("globals.json")),
        ..Default::default()
    };
    let result = convert("var-global.json", options);
    assert_eq!(
        result,
        script(
            r#"postman[Scope]({
  global: {
    first: "one",
    second: "two",
    third: "three"
  }
});"#,
            r#"res = http.get(`http://${pm[Var]("first")}.${pm[Var]("third")}`);"#
        )
    );
}

#[test]
fn convert_var_collection() {
    let result = convert("var-collection.json", ConvertOptions::default());
    assert_eq!(
        result,
        script(
            r#"postman[Scope]({
  collection: {
    domain: "example.com",
    machine: 573
  }
});"#,
            r#"res = http.get(`http://${pm[Var]("machine")}.${pm[Var]("domain")}`);"#
        )
    );
}

#[test]
fn convert_var_environment() {
    let options = ConvertOptions {
        environment: Some(fixture("environment.json")),
        ..Default::default()
    };
    let result = convert("var-environment.json", options);
    assert_eq!(
        result,
        script(
            r#"postman[Scope]({
  environment: {
    first: "one",
    second: "two",
    third: "three"
  }
});"#,
            r#"res = http.get(`http://${pm[Var]("first")}.${pm[Var]("third")}`);"#
        )
    );
}

#[test]
fn convert_var_data_json() {
    let options = ConvertOptions {
        json: Some(fixture("data-json.json")),
        ..Default::default()
    };
    let result = convert("var-data-json.json", options);
    assert_eq!(
        result,
        r#"// Auto-generated by the Load Impact converter

import "./postman-shim.js";
import http from "k6/http";

export let options = { maxRedirects: 4 };

const file = (() => {
  // Load data file
  const text = open("tests/fixtures/data-json.json");
  const rows = JSON.parse(text);
  return rows;
})();

const Scope = Symbol.for("scope");
const Var = Symbol.for("variable");
const Iteration = Symbol.for("iteration");
postman[Scope]({
  data: file
});

export default function() {
  let res;

  postman[Iteration](); // Advance data variables

  res = http.get(`http://${pm[Var]("first")}.${pm[Var]("third")}`);
}
"#
    );
}

#[test]
fn convert_var_data_csv() {
    let options = ConvertOptions {
        csv: Some(fixture("data-csv.csv")),
        ..Default::default()
    };
    let result = convert("var-data-csv.json", options);
    assert_eq!(
        result,
        r#"// Auto-generated by the Load Impact converter

import "./postman-shim.js";
import papaparse from "./papaparse.js";
import http from "k6/http";

export let options = { maxRedirects: 4 };

const file = (() => {
  // Load data file
  const text = open("tests/fixtures/data-csv.csv");
  const rows = papaparse.parse(text, { header: true }).data;
  return rows;
})();

const Scope = Symbol.for("scope");
const Var = Symbol.for("variable");
const Iteration = Symbol.for("iteration");
postman[Scope]({
  data: file
});

export default function() {
  let res;

  postman[Iteration](); // Advance data variables

  res = http.get(`http://${pm[Var]("first")}.${pm[Var]("third")}`);
}
"#
    );
}
