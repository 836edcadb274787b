//! Pages ranking just off the first results page.

use sw_core::entities::PageTwoOpportunity;

use crate::normalize::PerformanceSet;
use crate::settings::PageTwoBand;

/// Recent-window pages inside the position band with enough impressions,
/// most impressions first.
#[must_use]
pub fn find_page_two(performance: &PerformanceSet, band: &PageTwoBand) -> Vec<PageTwoOpportunity> {
    let mut opportunities: Vec<PageTwoOpportunity> = performance
        .iter()
        .filter(|page| band.contains(page.position()) && page.impressions() > band.min_impressions)
        .map(|page| PageTwoOpportunity {
            url: page.url().to_string(),
            position: page.position(),
            clicks: page.clicks_recent(),
            impressions: page.impressions(),
            ctr: page.ctr(),
        })
        .collect();

    opportunities.sort_by(|a, b| b.impressions.cmp(&a.impressions).then_with(|| a.url.cmp(&b.url)));
    opportunities
}
