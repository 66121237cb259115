//! Demographic questions answered over a loaded census table.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, info};

use crate::csv_reader::Record;
use crate::dataset::CensusTable;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("no records in subset: {subset}")]
    EmptySubset { subset: &'static str },
}

/// Answers to the ten fixed questions, keyed as they are serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicReport {
    #[serde(serialize_with = "ordered_counts")]
    pub race_count: Vec<(String, usize)>,
    pub average_age_men: f64,
    pub percentage_bachelors: f64,
    pub higher_education_rich: f64,
    pub lower_education_rich: f64,
    pub min_work_hours: u32,
    pub rich_percentage: f64,
    pub highest_earning_country: String,
    pub highest_earning_country_percentage: f64,
    #[serde(rename = "top_IN_occupation")]
    pub top_in_occupation: String,
}

fn ordered_counts<S>(counts: &[(String, usize)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(counts.len()))?;
    for (key, count) in counts {
        map.serialize_entry(key, count)?;
    }
    map.end()
}

pub fn compute(table: &CensusTable, print_data: bool) -> Result<DemographicReport, AnalysisError> {
    if table.is_empty() {
        return Err(AnalysisError::EmptySubset { subset: "all records" });
    }

    let (advanced, other) = table.education_split();
    debug!(
        "Advanced education: {:.1}%, without: {:.1}%",
        advanced as f64 / table.len() as f64 * 100.0,
        other as f64 / table.len() as f64 * 100.0
    );

    let min_work_hours = min_work_hours(table)?;
    let (highest_earning_country, highest_earning_country_percentage) =
        highest_earning_country(table)?;

    let report = DemographicReport {
        race_count: race_count(table),
        average_age_men: average_age_men(table)?,
        percentage_bachelors: percentage_bachelors(table)?,
        higher_education_rich: higher_education_rich(table)?,
        lower_education_rich: lower_education_rich(table)?,
        min_work_hours,
        rich_percentage: rich_percentage(table, min_work_hours)?,
        highest_earning_country,
        highest_earning_country_percentage,
        top_in_occupation: top_in_occupation(table)?,
    };
    info!("Computed demographic report over {} records", table.len());

    if print_data {
        print!("{}", report);
    }
    Ok(report)
}

/// Records per race, most frequent first. Equal counts keep first-seen order.
pub fn race_count(table: &CensusTable) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for record in table.records() {
        match index.get(record.race.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.race.as_str(), counts.len());
                counts.push((record.race.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn average_age_men(table: &CensusTable) -> Result<f64, AnalysisError> {
    let men = table.filter(|r| r.sex == "Male");
    if men.is_empty() {
        return Err(AnalysisError::EmptySubset { subset: "male records" });
    }
    let total: u64 = men.iter().map(|r| r.age as u64).sum();
    Ok(round1(total as f64 / men.len() as f64))
}

pub fn percentage_bachelors(table: &CensusTable) -> Result<f64, AnalysisError> {
    let bachelors = table.count(|r| r.education == "Bachelors");
    percentage(bachelors, table.len(), "all records").map(round1)
}

pub fn higher_education_rich(table: &CensusTable) -> Result<f64, AnalysisError> {
    let educated = table.filter(Record::has_advanced_education);
    rich_share(&educated, "advanced education").map(round1)
}

pub fn lower_education_rich(table: &CensusTable) -> Result<f64, AnalysisError> {
    let uneducated = table.filter(|r| !r.has_advanced_education());
    rich_share(&uneducated, "non-advanced education").map(round1)
}

pub fn min_work_hours(table: &CensusTable) -> Result<u32, AnalysisError> {
    table
        .records()
        .iter()
        .map(|r| r.hours_per_week)
        .min()
        .ok_or(AnalysisError::EmptySubset { subset: "all records" })
}

/// Share of `>50K` earners among those working exactly `min_hours`, unrounded.
pub fn rich_percentage(table: &CensusTable, min_hours: u32) -> Result<f64, AnalysisError> {
    let min_workers = table.filter(|r| r.hours_per_week == min_hours);
    rich_share(&min_workers, "minimum-hours workers")
}

/// Country holding the largest share of all `>50K` earners, with that share.
pub fn highest_earning_country(table: &CensusTable) -> Result<(String, f64), AnalysisError> {
    let rich = table.filter(Record::is_rich);
    let (country, count) = mode(rich.iter().map(|r| r.native_country.as_str()))
        .ok_or(AnalysisError::EmptySubset { subset: ">50K earners" })?;
    let share = percentage(count, rich.len(), ">50K earners")?;
    Ok((country, round1(share)))
}

pub fn top_in_occupation(table: &CensusTable) -> Result<String, AnalysisError> {
    let earners = table.filter(|r| r.is_rich() && r.native_country == "India");
    mode(earners.iter().map(|r| r.occupation.as_str()))
        .map(|(occupation, _)| occupation)
        .ok_or(AnalysisError::EmptySubset {
            subset: ">50K earners in India",
        })
}

fn rich_share(subset: &[&Record], name: &'static str) -> Result<f64, AnalysisError> {
    let rich = subset.iter().filter(|r| r.is_rich()).count();
    percentage(rich, subset.len(), name)
}

fn percentage(part: usize, base: usize, subset: &'static str) -> Result<f64, AnalysisError> {
    if base == 0 {
        return Err(AnalysisError::EmptySubset { subset });
    }
    Ok(part as f64 / base as f64 * 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

// Ties resolve to the lexicographically smallest value.
fn mode<'a, I>(values: I) -> Option<(String, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((value, count));
        }
    }
    best.map(|(value, count)| (value.to_string(), count))
}

impl fmt::Display for DemographicReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of each race:")?;
        for (race, count) in &self.race_count {
            writeln!(f, "  {:<20} {}", race, count)?;
        }
        writeln!(f, "Average age of men: {:.1}", self.average_age_men)?;
        writeln!(f, "Percentage with Bachelors degrees: {:.1}%", self.percentage_bachelors)?;
        writeln!(
            f,
            "Percentage with higher education that earn >50K: {:.1}%",
            self.higher_education_rich
        )?;
        writeln!(
            f,
            "Percentage without higher education that earn >50K: {:.1}%",
            self.lower_education_rich
        )?;
        writeln!(f, "Min work time: {} hours/week", self.min_work_hours)?;
        writeln!(
            f,
            "Percentage of rich among those who work fewest hours: {:.1}%",
            self.rich_percentage
        )?;
        writeln!(f, "Country with highest percentage of rich: {}", self.highest_earning_country)?;
        writeln!(
            f,
            "Highest percentage of rich people in country: {:.1}%",
            self.highest_earning_country_percentage
        )?;
        writeln!(f, "Top occupations in India: {}", self.top_in_occupation)
    }
}
