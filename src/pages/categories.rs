//! Category catalog for the documentation site.

/// One category page: its slug (file and data name) and display title.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// URL/file slug, e.g. `time-series`.
    pub slug: &'static str,
    /// Page title, e.g. `Time Series Packages`.
    pub title: &'static str,
}

impl Category {
    /// What: Path or URL of the category's data file.
    ///
    /// Inputs:
    /// - `base`: Directory or URL prefix of the data files
    ///
    /// Output:
    /// - `<base>/<slug>.json`
    pub fn data_path(&self, base: &str) -> String {
        format!("{}/{}.json", base.trim_end_matches('/'), self.slug)
    }

    /// File name of the generated page.
    pub fn page_file_name(&self) -> String {
        format!("{}.qmd", self.slug)
    }
}

/// Default location of the data files relative to the generated pages.
pub const DEFAULT_DATA_BASE: &str = "../data/categories";

const CATEGORIES: &[Category] = &[
    Category { slug: "r-lib", title: "r-lib Packages" },
    Category { slug: "r-spatial", title: "r-spatial Packages" },
    Category { slug: "remote-sensing", title: "Remote Sensing Packages" },
    Category { slug: "reporting", title: "Reporting Packages" },
    Category { slug: "ropensci", title: "rOpenSci Packages" },
    Category { slug: "shiny", title: "Shiny Packages" },
    Category { slug: "social-science", title: "Social Science Packages" },
    Category { slug: "spatial-analysis", title: "Spatial Analysis Packages" },
    Category { slug: "spatial", title: "Spatial Packages" },
    Category { slug: "sports-analytics", title: "Sports Analytics Packages" },
    Category { slug: "stan", title: "Stan Packages" },
    Category { slug: "statistical-modeling", title: "Statistical Modeling Packages" },
    Category { slug: "statistics", title: "Statistics Packages" },
    Category { slug: "testing", title: "Testing Packages" },
    Category { slug: "text-mining", title: "Text Mining Packages" },
    Category { slug: "tidyverse", title: "Tidyverse Packages" },
    Category { slug: "time-series", title: "Time Series Packages" },
    Category { slug: "visualization", title: "Visualization Packages" },
    Category { slug: "web-scraping", title: "Web Scraping Packages" },
];

/// All categories in catalog order.
pub const fn all() -> &'static [Category] {
    CATEGORIES
}

/// What: Look up a category by slug.
///
/// Inputs:
/// - `slug`: Category slug (case-insensitive)
///
/// Output:
/// - The category, or `None` when unknown.
pub fn find(slug: &str) -> Option<&'static Category> {
    let slug = slug.trim();
    CATEGORIES.iter().find(|c| c.slug.eq_ignore_ascii_case(slug))
}
