use super::read_text;
use anyhow::Result;
use std::path::Path;
use vitae_score::deep_similarity;

pub fn run(resume_path: &Path, job_path: &Path, json: bool) -> Result<()> {
    let resume = read_text(resume_path)?;
    let job = read_text(job_path)?;

    let result = deep_similarity(&resume, &job);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Similarity:    {:.3}", result.similarity);
    println!("Confidence:    {:.0} / 100", result.confidence);

    if !result.semantic_clusters.is_empty() {
        println!();
        println!("Semantic clusters:");
        for cluster in &result.semantic_clusters {
            println!("  {cluster}");
        }
    }

    if !result.key_phrases.is_empty() {
        println!();
        println!("Key phrases:");
        for phrase in &result.key_phrases {
            println!("  {phrase}");
        }
    }

    if !result.contextual_matches.is_empty() {
        println!();
        println!("Strongest sentence matches:");
        for m in result.contextual_matches.iter().take(5) {
            println!(
                "  [{:?} {:.3}] \"{}\" ~ \"{}\"",
                m.importance, m.similarity, m.resume_phrase, m.job_phrase
            );
        }
    }

    Ok(())
}
