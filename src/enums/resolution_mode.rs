use std::fmt;

/// Branch or pull request a project status is requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectTarget {
    Branch(String),
    PullRequest(String),
}

/// How the quality gate of this run gets resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionMode {
    /// A previous scanner run left a task handle behind; its analysis is checked.
    Integrated { task_handle: String },
    /// Only the project key is known.
    Simple { project_key: String },
    /// Project key plus a branch or a pull request.
    Advanced { project_key: String, target: ProjectTarget },
}

impl ResolutionMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integrated { .. } => "integrated",
            Self::Simple { .. } => "simple",
            Self::Advanced { .. } => "advanced",
        }
    }
}

impl fmt::Display for ResolutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integrated { task_handle } => write!(f, "integrated (task: {})", task_handle),
            Self::Simple { project_key } => write!(f, "simple (project: {})", project_key),
            Self::Advanced { project_key, target: ProjectTarget::Branch(branch) } => {
                write!(f, "advanced (project: {}, branch: {})", project_key, branch)
            }
            Self::Advanced { project_key, target: ProjectTarget::PullRequest(pull_request) } => {
                write!(f, "advanced (project: {}, pull request: {})", project_key, pull_request)
            }
        }
    }
}

/// Parameters of the final `api/qualitygates/project_status` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusQuery {
    AnalysisId(String),
    Project { project_key: String, target: Option<ProjectTarget> },
}

impl StatusQuery {
    /// Query parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::AnalysisId(analysis_id) => vec![("analysisId", analysis_id.as_str())],
            Self::Project { project_key, target } => {
                let mut params = vec![("projectKey", project_key.as_str())];
                match target {
                    Some(ProjectTarget::Branch(branch)) => params.push(("branch", branch.as_str())),
                    Some(ProjectTarget::PullRequest(pull_request)) => params.push(("pullRequest", pull_request.as_str())),
                    None => {}
                }
                params
            }
        }
    }
}
