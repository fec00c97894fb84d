use super::read_text;
use anyhow::Result;
use std::path::Path;
use vitae_core::{Bm25Config, Industry};
use vitae_lexicon::RoleCategory;
use vitae_score::Analyzer;

#[allow(clippy::too_many_arguments)]
pub fn run(
    resume_path: &Path,
    job_path: Option<&Path>,
    industry: Option<&str>,
    category: Option<&str>,
    k1: Option<f64>,
    b: Option<f64>,
    json: bool,
) -> Result<()> {
    let resume = read_text(resume_path)?;
    let job = job_path.map(read_text).transpose()?;

    let industry_hint: Option<Industry> = industry.map(str::parse).transpose()?;
    let category: RoleCategory = category
        .map(str::parse)
        .transpose()?
        .unwrap_or(RoleCategory::SoftwareEngineering);

    let defaults = Bm25Config::default();
    let config = Bm25Config {
        k1: k1.unwrap_or(defaults.k1),
        b: b.unwrap_or(defaults.b),
    };

    tracing::info!(
        resume_bytes = resume.len(),
        has_jd = job.is_some(),
        "running analysis"
    );

    let analyzer = Analyzer::new().with_config(config).with_category(category);
    let analysis = analyzer.analyze(&resume, job.as_deref(), industry_hint);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let b = &analysis.breakdown;
    println!("Total score:      {:>5.0} / 100", b.total_score);
    println!("  Density:        {:>5.0}", b.density_score);
    println!("  Section:        {:>5.0}", b.section_score);
    println!("  Context:        {:>5.0}", b.context_score);
    println!("  Stuffing:       -{:>4.0}", b.stuffing_penalty);
    println!();
    println!(
        "Industry:         {} (fit: {:?}, adjusted score {:.1})",
        analysis.industry, analysis.industry_fit, analysis.industry_score
    );
    if let Some(similarity) = analysis.semantic_similarity {
        println!("Semantic match:   {similarity:.3}");
    }
    if analysis.stuffing.is_stuffing {
        println!(
            "Keyword stuffing detected: {}",
            analysis.stuffing.stuffed_keywords.join(", ")
        );
    }
    if !analysis.flags.is_empty() {
        println!("Flags:            {:?}", analysis.flags);
    }

    println!();
    println!("Top keywords:");
    for detail in analysis.keywords.iter().take(15) {
        println!(
            "  {:<28} relevance {:>5.2} ({:?})  density {:>3.0}  placement {:>3.0}  context {:>3.0}",
            detail.keyword,
            detail.relevance.score,
            detail.relevance.tier,
            detail.density.density_score,
            detail.placement.total_weighted_score,
            detail.context.context_score,
        );
    }

    Ok(())
}
