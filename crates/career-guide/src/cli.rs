use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "career-guide",
    version,
    about = "Career and education guidance for the Indian job market"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search courses, skills, or providers
    Courses {
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long, help = "Course category, or \"all\"")]
        category: Option<String>,
        #[arg(long, help = "Online, Offline, Hybrid, or \"all\"")]
        format: Option<String>,
    },
    /// Search career guides and articles
    Resources {
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long, help = "Resource category, or \"all\"")]
        category: Option<String>,
    },
    /// Submit the career assessment and show career matches
    Careers {
        #[command(flatten)]
        assessment: Assessment,
    },
    /// Show the career dashboard
    Profile {
        #[arg(long, value_enum, default_value_t = ProfileTab::Overview)]
        tab: ProfileTab,
    },
    /// List the filter options of a listing
    Facets {
        #[arg(value_enum)]
        catalog: FacetCatalog,
    },
}

/// Career assessment form. Answers are echoed back but do not change the matches.
#[derive(Args, Debug, Clone, Default, Serialize)]
pub struct Assessment {
    #[arg(long, help = "e.g. \"Python, JavaScript, Communication\"")]
    pub skills: Option<String>,
    #[arg(long, help = "e.g. \"Technology, Design, Finance\"")]
    pub interests: Option<String>,
    #[arg(long, value_enum)]
    pub education: Option<EducationLevel>,
    #[arg(long, value_enum)]
    pub experience: Option<ExperienceLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    #[value(name = "12th")]
    #[serde(rename = "12th")]
    TwelfthGrade,
    Graduation,
    Masters,
    Phd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Fresher,
    Junior,
    Mid,
    Senior,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProfileTab {
    Overview,
    Careers,
    Courses,
    Skills,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FacetCatalog {
    Courses,
    Resources,
}
