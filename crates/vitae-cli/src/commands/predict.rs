use anyhow::Result;
use clap::Args;
use vitae_core::{EducationLevel, PredictionParams};
use vitae_score::predict_interview;

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Composite resume score, 0-100
    #[arg(long)]
    pub resume_score: f64,
    /// Job description keyword match, 0-100
    #[arg(long)]
    pub keyword_match: f64,
    /// Years of relevant experience
    #[arg(long)]
    pub years_experience: f64,
    /// Years the posting requires
    #[arg(long)]
    pub years_required: f64,
    /// Candidate education: highschool|associates|bachelors|masters|phd
    #[arg(long, default_value = "bachelors")]
    pub education: String,
    /// Required education level
    #[arg(long, default_value = "bachelors")]
    pub education_required: String,
    /// The role is remote
    #[arg(long)]
    pub remote: bool,
    /// Candidate is local to the role
    #[arg(long)]
    pub location_match: bool,
    /// Days since the posting went up
    #[arg(long, default_value_t = 7)]
    pub days_posted: u32,
    /// Candidate has an internal referral
    #[arg(long)]
    pub referral: bool,
    /// Prior company tier, 1 (top) to 5
    #[arg(long, default_value_t = 3)]
    pub company_tier: u8,
    /// Candidate has a portfolio or public work
    #[arg(long)]
    pub portfolio: bool,
    /// Emit JSON instead of the human-readable report
    #[arg(long)]
    pub json: bool,
}

fn parse_education(s: &str) -> Result<EducationLevel> {
    match s.to_lowercase().as_str() {
        "highschool" | "high-school" => Ok(EducationLevel::HighSchool),
        "associates" => Ok(EducationLevel::Associates),
        "bachelors" => Ok(EducationLevel::Bachelors),
        "masters" => Ok(EducationLevel::Masters),
        "phd" | "doctorate" => Ok(EducationLevel::Phd),
        other => anyhow::bail!("unknown education level: {other}"),
    }
}

pub fn run(args: &PredictArgs) -> Result<()> {
    let params = PredictionParams {
        resume_score: args.resume_score,
        keyword_match_percent: args.keyword_match,
        years_experience: args.years_experience,
        years_required: args.years_required,
        education_level: parse_education(&args.education)?,
        education_required: parse_education(&args.education_required)?,
        is_remote: args.remote,
        location_match: args.location_match,
        days_posted: args.days_posted,
        has_referral: args.referral,
        prior_company_tier: args.company_tier,
        has_portfolio: args.portfolio,
    };

    let prediction = predict_interview(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    println!(
        "Interview probability: {:.0}%  (confidence: {:?})",
        prediction.probability, prediction.confidence
    );
    println!();
    println!("Factors (by weight):");
    for factor in &prediction.factors {
        println!(
            "  {:<24} score {:>3.0}  weight {:.3}  [{:?}] {}",
            factor.name, factor.score, factor.weight, factor.status, factor.actionable
        );
    }

    Ok(())
}
