use super::normalizer::{normalize_header, parse_stipend};
use super::CatalogError;
use crate::matching::{normalize_text, Posting, SkillSet};
use csv::StringRecord;
use std::collections::BTreeMap;
use std::io::Read;
use tracing::debug;

pub const REQUIRED_COLUMNS: [&str; 8] = [
    "internship_id",
    "title",
    "company_name",
    "required_education",
    "required_skills",
    "sector",
    "location",
    "stipend",
];

#[derive(Debug)]
pub(crate) struct ParsedCatalog {
    pub(crate) postings: Vec<Posting>,
    pub(crate) dropped: usize,
}

pub(crate) fn parse_postings<R: Read>(reader: R) -> Result<ParsedCatalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;
    let mut postings = Vec::new();
    let mut dropped = 0;

    for (index, record) in csv_reader.into_records().enumerate() {
        let record = record?;
        match columns.posting(&record) {
            Some(posting) => postings.push(posting),
            None => {
                // header is line 1
                debug!(line = index + 2, "skipping posting without required skills");
                dropped += 1;
            }
        }
    }

    Ok(ParsedCatalog { postings, dropped })
}

/// Column positions resolved from the header row.
struct ColumnMap {
    internship_id: usize,
    title: usize,
    company_name: usize,
    required_education: usize,
    required_skills: usize,
    sector: usize,
    location: usize,
    stipend: usize,
    extras: Vec<(usize, String)>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, CatalogError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let position = |column: &'static str| {
            names
                .iter()
                .position(|name| name == column)
                .ok_or(CatalogError::MissingColumn(column))
        };

        let extras = names
            .iter()
            .enumerate()
            .filter(|(_, name)| !name.is_empty() && !REQUIRED_COLUMNS.contains(&name.as_str()))
            .map(|(index, name)| (index, name.clone()))
            .collect();

        Ok(Self {
            internship_id: position("internship_id")?,
            title: position("title")?,
            company_name: position("company_name")?,
            required_education: position("required_education")?,
            required_skills: position("required_skills")?,
            sector: position("sector")?,
            location: position("location")?,
            stipend: position("stipend")?,
            extras,
        })
    }

    fn posting(&self, record: &StringRecord) -> Option<Posting> {
        let cell = |index: usize| record.get(index).unwrap_or("");

        let required_skills = SkillSet::parse(cell(self.required_skills));
        if required_skills.is_empty() {
            return None;
        }

        let details: BTreeMap<String, String> = self
            .extras
            .iter()
            .map(|(index, name)| (name.clone(), cell(*index).to_string()))
            .collect();

        Some(Posting {
            internship_id: cell(self.internship_id).to_string(),
            title: cell(self.title).to_string(),
            company_name: cell(self.company_name).to_string(),
            required_education: normalize_text(cell(self.required_education)),
            required_skills,
            sector: normalize_text(cell(self.sector)),
            location: normalize_text(cell(self.location)),
            stipend: parse_stipend(cell(self.stipend)),
            details,
        })
    }
}
