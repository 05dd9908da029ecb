//! HTML fixtures shaped like books.toscrape.com pages

/// Product page with every field present
pub const PRODUCT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en-us">
<head><title>A Light in the Attic | Books to Scrape - Sandbox</title></head>
<body>
<div class="container-fluid page">
  <div class="page_inner">
    <ul class="breadcrumb">
      <li><a href="../../index.html">Home</a></li>
      <li><a href="../category/books_1/index.html">Books</a></li>
      <li><a href="../category/books/poetry_23/index.html">Poetry</a></li>
      <li class="active">A Light in the Attic</li>
    </ul>
    <div id="content_inner">
      <article class="product_page">
        <div class="row">
          <div class="col-sm-6">
            <div id="product_gallery" class="carousel">
              <div class="thumbnail">
                <div class="carousel-inner">
                  <div class="item active">
                    <img src="../../media/cache/fe/72/fe72f0532301ec28892ae79a629a293c.jpg" alt="A Light in the Attic" />
                  </div>
                </div>
              </div>
            </div>
          </div>
          <div class="col-sm-6 product_main">
            <h1>A Light in the Attic</h1>
            <p class="price_color">£51.77</p>
            <p class="instock availability"><i class="icon-ok"></i> In stock (22 available)</p>
            <p class="star-rating Three">
              <i class="icon-star"></i>
            </p>
          </div>
        </div>
        <div id="product_description" class="sub-header">
          <h2>Product Description</h2>
        </div>
        <p>It's hard to imagine a world without "A Light in the Attic". This now-classic collection of poetry and drawings ...more</p>
        <div class="sub-header">
          <h2>Product Information</h2>
        </div>
        <table class="table table-striped">
          <tr><th>UPC</th><td>a897fe39b1053632</td></tr>
          <tr><th>Product Type</th><td>Books</td></tr>
          <tr><th>Price (excl. tax)</th><td>£51.77</td></tr>
          <tr><th>Price (incl. tax)</th><td>£51.77</td></tr>
          <tr><th>Tax</th><td>£0.00</td></tr>
          <tr><th>Availability</th><td>In stock (22 available)</td></tr>
          <tr><th>Number of reviews</th><td>0</td></tr>
        </table>
      </article>
    </div>
  </div>
</div>
</body>
</html>"#;

/// Product page with no description block and a partial table
pub const PRODUCT_PAGE_SPARSE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <ul class="breadcrumb">
    <li><a href="../../index.html">Home</a></li>
    <li><a href="../category/books_1/index.html">Books</a></li>
    <li><a href="../category/books/default_15/index.html">Default</a></li>
    <li class="active">Alice in Wonderland (Alice's Adventures in Wonderland #1)</li>
  </ul>
  <article class="product_page">
    <div class="item active">
      <img src="../../media/cache/96/ee/96ee77d71a31b7694dac6855f6affe4e.jpg" alt="Alice" />
    </div>
    <h1>Alice in Wonderland (Alice's Adventures in Wonderland #1)</h1>
    <p class="star-rating One"></p>
    <table class="table table-striped">
      <tr><th>UPC</th><td>cd2a2a70dd5d176d</td></tr>
      <tr><th>Price (incl. tax)</th><td>£55.53</td></tr>
    </table>
  </article>
</body>
</html>"#;

/// Page with none of the product markup
pub const EMPTY_PAGE: &str = "<html><head></head><body><p>Nothing here</p></body></html>";

/// Home page with the category navigation list
pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <div class="side_categories">
    <ul class="nav nav-list">
      <li>
        <a href="catalogue/category/books_1/index.html">
          Books
        </a>
        <ul>
          <li>
            <a href="catalogue/category/books/travel_2/index.html">
              Travel
            </a>
          </li>
          <li>
            <a href="catalogue/category/books/health_47/index.html">
              Health
            </a>
          </li>
          <li>
            <a href="catalogue/category/books/sequential-art_5/index.html">
              Sequential
              Art
            </a>
          </li>
        </ul>
      </li>
    </ul>
  </div>
</body>
</html>"#;

/// Category listing page; `pager` is inserted after the product list
pub fn category_page(title: &str, product_slugs: &[&str], pager: Option<&str>) -> String {
    let articles: String = product_slugs
        .iter()
        .map(|slug| {
            format!(
                r#"<li class="col-xs-6 col-sm-4 col-md-3 col-lg-3">
  <article class="product_pod">
    <div class="image_container">
      <a href="../../../{slug}/index.html"><img src="../../../../media/cache/{slug}.jpg" alt="{slug}" class="thumbnail"></a>
    </div>
    <h3><a href="../../../{slug}/index.html" title="{slug}">{slug}</a></h3>
  </article>
</li>
"#
            )
        })
        .collect();

    let pager = pager
        .map(|text| {
            format!(
                r#"<ul class="pager">
  <li class="current">
      {text}
  </li>
  <li class="next"><a href="page-2.html">next</a></li>
</ul>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="page-header action"><h1>{title}</h1></div>
  <section>
    <ol class="row">
{articles}    </ol>
    <div>{pager}</div>
  </section>
</body>
</html>"#
    )
}
