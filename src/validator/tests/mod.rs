
/// Markup that satisfies every check for the default keyword list
pub(super) fn complete_page() -> String {
    let description = format!(
        "{:.<130}",
        "Independent capital introduction for emerging hedge fund managers"
    );
    let copy = "Institutional investors trust our allocator network. ".repeat(60);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>Capital Introduction Services | Example Capital</title>
  <meta name="description" content="{description}">
  <meta property="og:title" content="Capital Introduction Services">
  <meta property="og:description" content="Meet the right allocators">
  <meta property="og:image" content="https://example.com/og.png">
  <script type="application/ld+json">
    {{"@context": "https://schema.org", "@type": "FinancialService", "name": "Example Capital"}}
  </script>
</head>
<body>
  <nav>
    <a href="/services">Services</a>
    <a href="/pricing">Pricing</a>
    <a href="/faq">FAQ</a>
  </nav>
  <h1>Capital introduction for emerging managers</h1>
  <p>{copy}</p>
</body>
</html>"#
    )
}

/// Clean, keyword-bearing URL for [`complete_page`]
pub(super) const COMPLETE_URL: &str = "https://example.com/services/capital-introduction";
