use super::read_text;
use anyhow::Result;
use std::path::Path;
use vitae_score::Analyzer;

pub fn run(resume_path: &Path, job_path: Option<&Path>, json: bool) -> Result<()> {
    let resume = read_text(resume_path)?;
    let job = job_path.map(read_text).transpose()?;

    let quick = Analyzer::new().quick_score(&resume, job.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&quick)?);
        return Ok(());
    }

    println!("Score:         {:>5.0} / 100  (grade {})", quick.score, quick.grade);
    println!("  Keywords:    {:>5.1}", quick.keyword_score);
    println!("  Format:      {:>5.0}", quick.format_score);
    println!("  Content:     {:>5.0}", quick.completeness_score);
    if !quick.flags.is_empty() {
        println!("Flags:         {:?}", quick.flags);
    }

    Ok(())
}
