//! Immutable posting catalog and its CSV loader.

mod normalizer;
mod parser;

use crate::matching::{Posting, SkillVocabulary};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

pub use parser::REQUIRED_COLUMNS;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read internship catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid internship catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("internship catalog is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("internship catalog has no usable postings ({dropped} row(s) without required skills)")]
    Empty { dropped: usize },
}

/// Read-only snapshot of postings and the skill vocabulary derived from them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    postings: Vec<Posting>,
    vocabulary: SkillVocabulary,
}

impl Catalog {
    pub fn new(postings: Vec<Posting>) -> Self {
        let vocabulary = SkillVocabulary::from_postings(&postings);
        Self {
            postings,
            vocabulary,
        }
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        let sectors: BTreeSet<&str> = self
            .postings
            .iter()
            .map(|posting| posting.sector.as_str())
            .filter(|sector| !sector.is_empty())
            .collect();
        let locations: BTreeSet<&str> = self
            .postings
            .iter()
            .map(|posting| posting.location.as_str())
            .filter(|location| !location.is_empty())
            .collect();

        CatalogStats {
            postings: self.postings.len(),
            skills: self.vocabulary.len(),
            sectors: sectors.into_iter().map(str::to_string).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
        }
    }
}

/// Summary of a loaded catalog for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub postings: usize,
    pub skills: usize,
    pub sectors: Vec<String>,
    pub locations: Vec<String>,
}

pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), postings = catalog.len(), "loaded internship catalog");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
        let parsed = parser::parse_postings(reader)?;

        if parsed.dropped > 0 {
            warn!(
                dropped = parsed.dropped,
                "dropped catalog rows without required skills"
            );
        }

        if parsed.postings.is_empty() {
            return Err(CatalogError::Empty {
                dropped: parsed.dropped,
            });
        }

        Ok(Catalog::new(parsed.postings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CSV: &str = "internship_id,title,company_name,required_education,required_skills,sector,location,stipend\n\
INT-1,Analyst,Acme,b.com,\"excel, tally\",Finance,Mumbai,8000\n\
INT-2,Developer,Byte,b.tech,\"python, sql\",Information Technology,Bengaluru,12000\n\
INT-3,Designer,Pixel,b.design,figma,Design,Mumbai,\n";

    #[test]
    fn catalog_builds_vocabulary_from_all_postings() {
        let catalog = CatalogLoader::from_reader(Cursor::new(CSV)).expect("catalog loads");
        let vocabulary = catalog.vocabulary();
        assert_eq!(vocabulary.len(), 5);
        for skill in ["excel", "tally", "python", "sql", "figma"] {
            assert!(vocabulary.contains(skill), "missing {skill}");
        }
    }

    #[test]
    fn stats_list_distinct_sectors_and_locations() {
        let catalog = CatalogLoader::from_reader(Cursor::new(CSV)).expect("catalog loads");
        let stats = catalog.stats();
        assert_eq!(stats.postings, 3);
        assert_eq!(stats.locations, vec!["bengaluru", "mumbai"]);
        assert_eq!(
            stats.sectors,
            vec!["design", "finance", "information technology"]
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let csv = "internship_id,title,company_name,required_education,required_skills,sector,location,stipend\n\
INT-1,Analyst,Acme,b.com,,Finance,Mumbai,8000\n";
        let error = CatalogLoader::from_reader(Cursor::new(csv)).expect_err("no postings");
        assert!(matches!(error, CatalogError::Empty { dropped: 1 }));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = CatalogLoader::from_path("./does-not-exist.csv").expect_err("io error");
        match error {
            CatalogError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
