//! Regional aggregation and consumer ranking
//!
//! Regions are static domain knowledge: an ordered list of named groups of
//! series names, injected by the caller (see [`RegionMap::india`] for the
//! grouping used with the bundled dataset).

use lazy_static::lazy_static;
use log::warn;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::forecast::round2;
use crate::stats::{compute_statistics, StatisticsSummary};
use crate::table::SeriesTable;

/// Number of series returned by the top-consumer ranking by default
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// A named group of series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionGroup {
    /// Region name
    pub name: String,
    /// Member series names in declaration order
    #[serde(default)]
    pub members: Vec<String>,
}

impl RegionGroup {
    /// Create a group from a name and its members
    pub fn new<N, I, S>(name: N, members: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            members: members.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered region to member-series mapping
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionMap {
    groups: Vec<RegionGroup>,
}

lazy_static! {
    static ref INDIA_REGIONS: RegionMap = RegionMap::new(vec![
        RegionGroup::new(
            "North",
            ["Punjab", "Haryana", "Delhi", "UP", "Uttarakhand", "HP", "J&K", "Chandigarh"],
        ),
        RegionGroup::new("West", ["Gujarat", "Maharashtra", "Goa", "DNH"]),
        RegionGroup::new(
            "South",
            ["Andhra Pradesh", "Telangana", "Karnataka", "Kerala", "Tamil Nadu", "Pondy"],
        ),
        RegionGroup::new("East", ["Bihar", "Jharkhand", "Odisha", "West Bengal"]),
        RegionGroup::new(
            "Northeast",
            [
                "Sikkim",
                "Arunachal Pradesh",
                "Assam",
                "Manipur",
                "Meghalaya",
                "Mizoram",
                "Nagaland",
                "Tripura",
            ],
        ),
        RegionGroup::new("Central", ["Chhattisgarh", "MP", "Rajasthan"]),
    ]);
}

impl RegionMap {
    /// Create a map from groups in declaration order
    pub fn new(groups: Vec<RegionGroup>) -> Self {
        Self { groups }
    }

    /// Six-region grouping of Indian states and union territories
    pub fn india() -> Self {
        INDIA_REGIONS.clone()
    }

    /// Groups in declaration order
    pub fn groups(&self) -> &[RegionGroup] {
        &self.groups
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no regions
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up a region by name
    pub fn get(&self, name: &str) -> Option<&RegionGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

impl FromIterator<RegionGroup> for RegionMap {
    fn from_iter<I: IntoIterator<Item = RegionGroup>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Aggregated consumption of one region
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalSummary {
    /// Region name
    pub region: String,
    /// Sum of member totals, rounded to 2 decimals
    pub total: f64,
    /// Declared member count, including members absent from the table
    pub member_count: usize,
}

impl RegionalSummary {
    /// Fraction of `grand_total` held by this region (0 when the grand total is 0)
    pub fn share(&self, grand_total: f64) -> f64 {
        if grand_total == 0.0 {
            0.0
        } else {
            self.total / grand_total
        }
    }
}

/// One entry of the top-consumer ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerRank {
    /// Series name
    pub series_name: String,
    /// Series total
    pub total: f64,
    /// Series average
    pub average: f64,
}

/// Sum member totals per region, in region declaration order
///
/// Members missing from the table contribute nothing.
pub fn aggregate_regions(table: &SeriesTable, regions: &RegionMap) -> Vec<RegionalSummary> {
    aggregate_regions_by(table, regions, |name| compute_statistics(table, name))
}

pub(crate) fn aggregate_regions_by<F>(
    table: &SeriesTable,
    regions: &RegionMap,
    stats: F,
) -> Vec<RegionalSummary>
where
    F: Fn(&str) -> StatisticsSummary,
{
    regions
        .groups()
        .iter()
        .map(|group| {
            let total = group
                .members
                .iter()
                .filter(|member| {
                    let present = table.has_series(member.as_str());
                    if !present {
                        warn!("Region '{}': series '{}' not in table", group.name, member);
                    }
                    present
                })
                .map(|member| stats(member.as_str()).total)
                .sum::<f64>();

            RegionalSummary {
                region: group.name.clone(),
                total: round2(total),
                member_count: group.members.len(),
            }
        })
        .collect()
}

/// Rank series by descending total, keeping at most `limit`
///
/// Ties keep header order.
pub fn top_consumers(table: &SeriesTable, limit: usize) -> Vec<ConsumerRank> {
    top_consumers_by(table, limit, |name| compute_statistics(table, name))
}

pub(crate) fn top_consumers_by<F>(table: &SeriesTable, limit: usize, stats: F) -> Vec<ConsumerRank>
where
    F: Fn(&str) -> StatisticsSummary,
{
    let mut ranks: Vec<ConsumerRank> = table
        .series_names()
        .iter()
        .map(|name| {
            let summary = stats(name.as_str());
            ConsumerRank {
                series_name: name.clone(),
                total: summary.total,
                average: summary.average,
            }
        })
        .collect();

    ranks.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    ranks.truncate(limit);
    ranks
}
