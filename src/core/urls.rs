use crate::core::catalog::ReportCode;
use crate::utils::error::Result;
use crate::utils::validation::validate_url;

pub const BASE_URL: &str = "http://www.nws.noaa.gov/data/PQR/";

/// Portland, OR office products. Climate data for the city itself is filed
/// under the airport station (PDX) rather than the office node.
pub const REPORT_CODES: &[&str] = &[
    "HWOPQR",
    "WSWPQR", // winter storm warning
    "SFPOR",
    "AFDPQR",
    "RFWPQR",
    "ZFPPQR",
    "CLIPDX",
    "CF6PDX",
    "LCOPQR",
    "OSOPQR",
    "RRMPDX",
    "RTPPQR",
    "RVSPQR",
    "CWFPQR",
    "FWFPQR",
    "RVMPQR",
    "STQPQR",
];

/// Reports published outside the per-node data tree.
pub const EXTRA_URLS: &[&str] = &[
    // space weather
    "http://services.swpc.noaa.gov/text/advisory-outlook.txt",
];

pub fn report_urls() -> Result<Vec<String>> {
    build_urls(BASE_URL, REPORT_CODES, EXTRA_URLS)
}

/// `base` joined with each code, followed by `extras`, in that order.
pub fn build_urls(base: &str, codes: &[&str], extras: &[&str]) -> Result<Vec<String>> {
    let base = validate_url("base_url", base)?;
    let mut urls = Vec::with_capacity(codes.len() + extras.len());

    for code in codes {
        let code = ReportCode::parse(code)?;
        let url = base.join(&code.to_string())?;
        urls.push(url.to_string());
    }

    for extra in extras {
        urls.push(validate_url("extra_url", extra)?.to_string());
    }

    Ok(urls)
}
