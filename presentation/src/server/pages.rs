//! Server-rendered HTML pages
//!
//! Every piece of user-controlled text goes through [`escape`] before it
//! reaches the markup.

use pricing_domain::{LocationCatalog, ModelKey, PredictionOutcome};

/// Raw form fields echoed back on the results page
#[derive(Debug, Clone, Default)]
pub struct FormEcho {
    pub total_sqft: String,
    pub bath: String,
    pub bhk: String,
    pub location: String,
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #222; }
nav { background: #1f2937; padding: 0.8rem 2rem; }
nav a { color: #fff; margin-right: 1.5rem; text-decoration: none; }
main { max-width: 760px; margin: 2rem auto; background: #fff; padding: 2rem; border-radius: 10px; }
label { display: block; margin-top: 1rem; font-weight: 600; }
input, select { width: 100%; padding: 0.5rem; margin-top: 0.3rem; }
button { margin-top: 1.5rem; width: 100%; padding: 0.8rem; background: #ff4b4b; color: #fff;
         border: 0; border-radius: 10px; font-size: 1.1rem; font-weight: bold; }
.error { background: #fde8e8; color: #9b1c1c; padding: 0.8rem; border-radius: 6px; }
.price { font-size: 2rem; color: #ff4b4b; text-align: center; }
table { width: 100%; border-collapse: collapse; }
td, th { padding: 0.4rem; border-bottom: 1px solid #eee; text-align: left; }
"#;

/// Escape text for HTML element and attribute contexts
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
<title>{title} | Bangalore House Price Predictor</title>
<style>{STYLE}</style>
</head>
<body>
<nav><a href="/">Home</a><a href="/predict">Predict</a><a href="/about">About</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn location_options(catalog: &LocationCatalog, selected: Option<&str>) -> String {
    catalog
        .iter()
        .map(|name| {
            let marker = if Some(name) == selected { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{marker}>{value}</option>"#,
                value = escape(name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn prediction_form(catalog: &LocationCatalog) -> String {
    format!(
        r#"<form method="post" action="/predict">
<label for="total_sqft">Total Square Feet</label>
<input id="total_sqft" name="total_sqft" type="number" min="300" max="30000" step="50" value="1200" required>
<label for="bhk">BHK (Bedrooms)</label>
<input id="bhk" name="bhk" type="number" min="1" max="10" value="3" required>
<label for="bath">Bathrooms</label>
<input id="bath" name="bath" type="number" min="1" max="10" value="2" required>
<label for="location">Location</label>
<select id="location" name="location">
{options}
</select>
<button type="submit">Predict Price</button>
</form>"#,
        options = location_options(catalog, catalog.first()),
    )
}

/// `GET /`
pub fn home(catalog: &LocationCatalog) -> String {
    let body = format!(
        r#"<h1>Bangalore House Price Predictor</h1>
<p>Estimate the price of a property in Bangalore from its size, rooms and locality.
{count} locations available.</p>
{form}"#,
        count = catalog.len(),
        form = prediction_form(catalog),
    );
    layout("Home", &body)
}

/// `GET /predict`, and `POST /predict` when the input is rejected
pub fn predict(catalog: &LocationCatalog, models: &[ModelKey], error: Option<&str>) -> String {
    let error = error
        .map(|message| format!(r#"<p class="error">{}</p>"#, escape(message)))
        .unwrap_or_default();
    let models = models
        .iter()
        .map(|key| {
            format!(
                "<li><strong>{}</strong>: {}</li>",
                escape(key.display_name()),
                escape(key.description())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let body = format!(
        r#"<h1>Predict a Price</h1>
{error}
{form}
<h2>Models</h2>
<ul>
{models}
</ul>"#,
        form = prediction_form(catalog),
    );
    layout("Predict", &body)
}

/// `POST /predict` on success
pub fn results(input: &FormEcho, outcome: &PredictionOutcome) -> String {
    let rows = outcome
        .predictions
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>₹ {:.2} Lakhs</td></tr>",
                escape(p.model.display_name()),
                p.price
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    let summary = &outcome.summary;
    let body = format!(
        r#"<h1>Prediction Results</h1>
<p class="price">₹ {average:.2} Lakhs</p>
<h2>Property</h2>
<table>
<tr><th>Total Square Feet</th><td>{sqft}</td></tr>
<tr><th>BHK</th><td>{bhk}</td></tr>
<tr><th>Bathrooms</th><td>{bath}</td></tr>
<tr><th>Location</th><td>{location}</td></tr>
</table>
<h2>Predictions</h2>
<table>
{rows}
</table>
<h2>Statistics</h2>
<table>
<tr><th>Average</th><td>{average:.2}</td></tr>
<tr><th>Minimum</th><td>{minimum:.2}</td></tr>
<tr><th>Maximum</th><td>{maximum:.2}</td></tr>
<tr><th>Range</th><td>{range:.2}</td></tr>
</table>
<p><a href="/predict">Predict another property</a></p>"#,
        sqft = escape(&input.total_sqft),
        bhk = escape(&input.bhk),
        bath = escape(&input.bath),
        location = escape(&input.location),
        average = summary.average,
        minimum = summary.minimum,
        maximum = summary.maximum,
        range = summary.range,
    );
    layout("Results", &body)
}

/// `GET /about`
pub fn about() -> String {
    let body = r#"<h1>About</h1>
<p>This application estimates residential property prices in Bangalore, in lakhs
of rupees, using a linear regression model trained on cleaned listing data.
The model uses four features: total square feet, number of bedrooms (BHK),
number of bathrooms and locality.</p>
<p>When the trained model cannot be loaded, a simple heuristic based on area
and room counts provides an approximate estimate instead.</p>
<h2>API</h2>
<ul>
<li><code>POST /api/predict</code>: JSON price prediction</li>
<li><code>GET /api/locations</code>: available locations</li>
<li><code>GET /api/health</code>: service health</li>
</ul>"#;
    layout("About", body)
}
