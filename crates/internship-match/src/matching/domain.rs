use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

/// Lower-cases and collapses whitespace so free text compares consistently.
pub fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Set of normalized skill tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// Splits comma separated skill text, dropping blank tokens.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(normalize_text)
                .filter(|token| !token.is_empty())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn overlap(&self, other: &SkillSet) -> usize {
        self.0.intersection(&other.0).count()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Every skill token required by at least one posting in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillVocabulary(BTreeSet<String>);

impl SkillVocabulary {
    pub fn from_postings(postings: &[Posting]) -> Self {
        Self(
            postings
                .iter()
                .flat_map(|posting| posting.required_skills.iter())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Splits `skills` into the tokens the catalog knows and the ones it does not.
    pub fn partition(&self, skills: SkillSet) -> (SkillSet, SkillSet) {
        let (known, unknown): (BTreeSet<String>, BTreeSet<String>) = skills
            .0
            .into_iter()
            .partition(|token| self.0.contains(token));
        (SkillSet(known), SkillSet(unknown))
    }
}

/// Catalog record for a single internship opening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub internship_id: String,
    pub title: String,
    pub company_name: String,
    pub required_education: String,
    pub required_skills: SkillSet,
    pub sector: String,
    pub location: String,
    pub stipend: u64,
    /// Extra catalog columns passed through to responses untouched.
    #[serde(flatten)]
    pub details: BTreeMap<String, String>,
}

/// Raw candidate input as submitted by the recommendation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub qualification: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: String,
    #[serde(default, alias = "sector", deserialize_with = "null_as_empty")]
    pub sector_interested: String,
    #[serde(default, alias = "location", deserialize_with = "null_as_empty")]
    pub location_interested: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Normalized candidate used by the scorer for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProfile {
    pub qualification: String,
    /// Skills restricted to the catalog vocabulary.
    pub skills: SkillSet,
    /// Tokens the candidate typed that no posting requires.
    pub unrecognized_skills: SkillSet,
    /// Whether any skill token was supplied before vocabulary filtering.
    pub skills_supplied: bool,
    pub sector: String,
    pub location: String,
}

impl CandidateProfile {
    pub fn from_request(request: &CandidateRequest, vocabulary: &SkillVocabulary) -> Self {
        let typed = SkillSet::parse(&request.skills);
        let skills_supplied = !typed.is_empty();
        let (skills, unrecognized_skills) = vocabulary.partition(typed);

        Self {
            qualification: normalize_text(&request.qualification),
            skills,
            unrecognized_skills,
            skills_supplied,
            sector: normalize_text(&request.sector_interested),
            location: normalize_text(&request.location_interested),
        }
    }
}
