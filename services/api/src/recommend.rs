use crate::infra::resolve_catalog;
use clap::Args;
use internship_match::catalog::Catalog;
use internship_match::config::AppConfig;
use internship_match::error::AppError;
use internship_match::matching::{
    CandidateRequest, MatchEngine, MatchExplanation, MatchPolicy, MatchVerdict, ScoredMatch,
    TextMatch,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Catalog CSV (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Highest qualification, e.g. "b.tech" or "12th pass"
    #[arg(long, default_value = "")]
    pub(crate) qualification: String,
    /// Comma separated skills
    #[arg(long, default_value = "")]
    pub(crate) skills: String,
    /// Preferred sector
    #[arg(long, default_value = "")]
    pub(crate) sector: String,
    /// Preferred location
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    /// Number of postings to return (clamped to 1..=20)
    #[arg(long)]
    pub(crate) top_k: Option<usize>,
    /// Require exact location and sector matches instead of substring matches
    #[arg(long)]
    pub(crate) exact: bool,
    /// Keep postings that share no skill with the candidate
    #[arg(long)]
    pub(crate) no_skill_gate: bool,
    /// Print the shortlist as JSON
    #[arg(long)]
    pub(crate) json: bool,
    /// Print the verdict for every posting in the catalog
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Catalog CSV (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

impl RecommendArgs {
    fn candidate(&self) -> CandidateRequest {
        CandidateRequest {
            qualification: self.qualification.clone(),
            skills: self.skills.clone(),
            sector_interested: self.sector.clone(),
            location_interested: self.location.clone(),
        }
    }

    fn policy(&self, base: MatchPolicy) -> MatchPolicy {
        let mut policy = base;
        if let Some(top_k) = self.top_k {
            policy = policy.with_top_k(top_k);
        }
        if self.exact {
            policy.text_match = TextMatch::Exact;
        }
        if self.no_skill_gate {
            policy.skill_gate = false;
        }
        policy
    }
}

pub(crate) fn run_recommend(mut args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = resolve_catalog(args.catalog.take(), &config)?;
    let engine = MatchEngine::new(args.policy(config.matching.clone()));
    let candidate = args.candidate();

    if args.explain {
        render_explanation(&engine.explain(&catalog, &candidate));
    }

    let shortlist = engine.recommend(&catalog, &candidate);
    if args.json {
        match serde_json::to_string_pretty(&shortlist) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("Shortlist unavailable: {err}"),
        }
    } else {
        render_shortlist(&catalog, &shortlist, engine.policy());
    }

    Ok(())
}

pub(crate) fn run_catalog_summary(mut args: CatalogArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = resolve_catalog(args.catalog.take(), &config)?;
    let stats = catalog.stats();

    println!("Internship catalog");
    println!("- {} postings", stats.postings);
    println!("- {} distinct skills", stats.skills);
    println!("- sectors: {}", stats.sectors.join(", "));
    println!("- locations: {}", stats.locations.join(", "));
    Ok(())
}

fn render_shortlist(catalog: &Catalog, shortlist: &[ScoredMatch<'_>], policy: &MatchPolicy) {
    println!(
        "Top {} of {} postings ({} returned)",
        policy.top_k,
        catalog.len(),
        shortlist.len()
    );

    if shortlist.is_empty() {
        println!("No matching internships found. Try different criteria.");
        return;
    }

    for (position, entry) in shortlist.iter().enumerate() {
        let posting = entry.posting;
        println!(
            "\n{}. {} at {} [{}] score {:.2}",
            position + 1,
            posting.title,
            posting.company_name,
            posting.internship_id,
            entry.score
        );
        println!(
            "   {} | {} | stipend {}",
            posting.sector, posting.location, posting.stipend
        );
        for component in &entry.components {
            println!(
                "   - {:?}: +{:.2} ({})",
                component.factor, component.points, component.notes
            );
        }
    }
}

fn render_explanation(explanation: &MatchExplanation<'_>) {
    let profile = &explanation.profile;
    println!("Candidate profile");
    println!("- qualification: {}", profile.qualification);
    println!(
        "- skills: {}",
        profile.skills.iter().collect::<Vec<_>>().join(", ")
    );
    if !profile.unrecognized_skills.is_empty() {
        println!(
            "- ignored skills (not in catalog): {}",
            profile
                .unrecognized_skills
                .iter()
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    println!("\nVerdicts");
    for (posting, verdict) in &explanation.verdicts {
        match verdict {
            MatchVerdict::Scored { score, .. } => {
                println!("- {} scored {:.2}", posting.internship_id, score)
            }
            MatchVerdict::Excluded(reason) => {
                println!("- {} excluded: {}", posting.internship_id, reason.summary())
            }
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_configured_policy() {
        let args = RecommendArgs {
            top_k: Some(3),
            exact: true,
            no_skill_gate: true,
            ..RecommendArgs::default()
        };

        let policy = args.policy(MatchPolicy::default());

        assert_eq!(policy.top_k, 3);
        assert_eq!(policy.text_match, TextMatch::Exact);
        assert!(!policy.skill_gate);
    }

    #[test]
    fn candidate_uses_form_field_names() {
        let args = RecommendArgs {
            qualification: "BBA".to_string(),
            sector: "marketing".to_string(),
            location: "mumbai".to_string(),
            ..RecommendArgs::default()
        };

        let candidate = args.candidate();

        assert_eq!(candidate.qualification, "BBA");
        assert_eq!(candidate.sector_interested, "marketing");
        assert_eq!(candidate.location_interested, "mumbai");
        assert_eq!(candidate.skills, "");
    }
}
