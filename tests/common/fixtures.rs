/// A booking confirmation as the dashboard assembles it: inline styles,
/// a tracking script and an HTML comment, all data already inlined.
pub const BOOKING_CONFIRMATION: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Booking BK-2291</title>
  <style>
    body { font-family: Arial, sans-serif; background: #f4f6f8; }
    .total { font-weight: bold; }
  </style>
  <script>window.analytics = { page: "booking" };</script>
</head>
<body>
  <!-- generated by the booking module -->
  <h1>Booking Confirmation</h1>
  <p>Vehicle: Volvo FH16 &amp; trailer</p>
  <p>Pick-up: 2024-05-02 08:00</p>
  <p class="total">Total: &euro;1&nbsp;250.00</p>
</body>
</html>"#;

/// An invoice with characters outside printable ASCII.
pub const INVOICE_WITH_ACCENTS: &str = "<html><body>\
<h2>Facture n&#176; 118</h2>\
<p>Client: Société Générale (Dépôt Nord)</p>\
<p>Montant: 980 € TTC</p>\
</body></html>";

/// A page whose only content is a script.
pub const SCRIPT_ONLY: &str =
    "<html><head><script>document.write('<p>hello</p>')</script></head><body></body></html>";

/// Roughly `paragraphs` * 40 words of filler text in separate paragraphs.
pub fn long_report(paragraphs: usize) -> String {
    let mut html = String::from("<html><body><h1>Fleet utilisation report</h1>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Section {i}: vehicles in the northern depot covered their scheduled routes \
             with minor delays caused by roadworks, refuelling stops and driver changes. \
             Maintenance windows were respected and no incidents were reported during the \
             period under review by the operations team.</p>"
        ));
    }
    html.push_str("</body></html>");
    html
}
