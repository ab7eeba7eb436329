//! Server-rendered HTML for the conversion pages.

use crate::core::codes::CurrencyInfo;
use crate::core::converter::ConversionResult;

/// Shown for every failed conversion; the cause is only logged.
pub const CONVERSION_ERROR: &str =
    "Something went wrong converting currency. Please check your input and try again.";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
  <nav><a href="/">Convert</a> | <a href="/table">Currency Table</a></nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Values to pre-fill the form with after a rejected submission.
#[derive(Debug, Default)]
pub struct FormValues<'a> {
    pub from_currency: &'a str,
    pub to_currency: &'a str,
    pub amount: &'a str,
}

pub fn home(values: &FormValues<'_>, error: Option<&str>) -> String {
    let error_html = error
        .map(|msg| format!("    <p class=\"error\" role=\"alert\">{}</p>\n", escape(msg)))
        .unwrap_or_default();
    let body = format!(
        r#"    <h1>Currency Converter</h1>
{error_html}    <form action="/conversion" method="post">
      <label>Converting from <input name="from_currency" value="{from}" placeholder="USD" required></label>
      <label>Converting to <input name="to_currency" value="{to}" placeholder="EUR" required></label>
      <label>Amount <input name="amount" value="{amount}" placeholder="1.00" required></label>
      <button type="submit">Convert</button>
    </form>
    <p>Not sure of a code? See the <a href="/table">currency table</a>.</p>"#,
        from = escape(values.from_currency),
        to = escape(values.to_currency),
        amount = escape(values.amount),
    );
    layout("Currency Converter", &body)
}

pub fn table(currencies: &[CurrencyInfo]) -> String {
    let rows: String = currencies
        .iter()
        .map(|c| {
            format!(
                "        <tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                c.code,
                escape(c.name),
                escape(c.symbol.unwrap_or(""))
            )
        })
        .collect();
    let body = format!(
        r#"    <h1>Currency Table</h1>
    <table>
      <thead><tr><th>Code</th><th>Currency</th><th>Symbol</th></tr></thead>
      <tbody>
{rows}      </tbody>
    </table>"#
    );
    layout("Currency Table", &body)
}

pub fn converted(result: &ConversionResult) -> String {
    let body = format!(
        r#"    <h1>Converted Amount</h1>
    <p class="result">{amount} {from} = <strong>{converted}</strong> {to}</p>
    <p>Exchange rate: 1 {from} = {rate:.4} {to}</p>
    <p>Rates as of {as_of}</p>
    <p><a href="/">Convert another amount</a></p>"#,
        amount = escape(&result.display_amount()),
        from = escape(&result.from_currency),
        converted = escape(&result.display_converted()),
        to = escape(&result.to_currency),
        rate = result.rate,
        as_of = result.as_of.format("%Y-%m-%d"),
    );
    layout("Converted Amount", &body)
}
