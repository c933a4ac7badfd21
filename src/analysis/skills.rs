// src/analysis/skills.rs
//! Static per-field skills vocabulary used to frame the prompts.

use super::types::Field;

/// Hard and soft skill labels for one career field. Compile-time constant,
/// never mutated.
#[derive(Debug, Clone, Copy)]
pub struct FieldSkillSet {
    pub hard: &'static [&'static str],
    pub soft: &'static [&'static str],
}

impl FieldSkillSet {
    pub fn hard_skills_line(&self) -> String {
        self.hard.join(", ")
    }

    pub fn soft_skills_line(&self) -> String {
        self.soft.join(", ")
    }
}

const DATA_ANALYSIS: FieldSkillSet = FieldSkillSet {
    hard: &[
        "Python",
        "R",
        "SQL",
        "Tableau",
        "Power BI",
        "Excel",
        "Pandas",
        "NumPy",
        "Data Visualization",
        "Statistical Analysis",
        "Machine Learning",
        "ETL",
        "Data Mining",
        "Big Data",
        "Apache Spark",
        "Hadoop",
        "Data Cleaning",
        "Predictive Modeling",
        "A/B Testing",
        "Data Warehousing",
    ],
    soft: &[
        "Critical Thinking",
        "Problem Solving",
        "Attention to Detail",
        "Communication",
        "Business Acumen",
        "Curiosity",
        "Analytical Thinking",
        "Presentation Skills",
        "Stakeholder Management",
        "Time Management",
    ],
};

const ECONOMICS: FieldSkillSet = FieldSkillSet {
    hard: &[
        "Econometrics",
        "Financial Modeling",
        "Cost-Benefit Analysis",
        "Excel",
        "Statistical Software (Stata, SPSS)",
        "Market Research",
        "Forecasting",
        "Business Valuation",
        "Risk Analysis",
        "Feasibility Studies",
        "Economic Theory",
        "Regression Analysis",
        "Financial Analysis",
        "Budget Planning",
        "Policy Analysis",
    ],
    soft: &[
        "Analytical Thinking",
        "Strategic Planning",
        "Communication",
        "Report Writing",
        "Critical Thinking",
        "Decision Making",
        "Presentation Skills",
        "Negotiation",
        "Research Skills",
        "Problem Solving",
        "Attention to Detail",
    ],
};

const HR: FieldSkillSet = FieldSkillSet {
    hard: &[
        "Recruitment",
        "HRIS Systems",
        "Performance Management",
        "Compensation & Benefits",
        "Labor Law",
        "Talent Acquisition",
        "Applicant Tracking Systems",
        "Onboarding",
        "Employee Relations",
        "Training & Development",
        "HR Analytics",
        "Payroll",
        "Compliance",
        "Organizational Development",
        "Workforce Planning",
    ],
    soft: &[
        "Communication",
        "Empathy",
        "Conflict Resolution",
        "Active Listening",
        "Confidentiality",
        "Negotiation",
        "Interpersonal Skills",
        "Emotional Intelligence",
        "Problem Solving",
        "Adaptability",
        "Ethics",
        "Relationship Building",
    ],
};

const POLITICS: FieldSkillSet = FieldSkillSet {
    hard: &[
        "Policy Analysis",
        "Research Methodology",
        "Political Theory",
        "Legislative Process",
        "Campaign Management",
        "Public Opinion Research",
        "Data Analysis",
        "Writing",
        "International Relations",
        "Constitutional Law",
        "Statistical Analysis",
        "Strategic Communication",
        "Lobbying",
        "Stakeholder Engagement",
        "Media Relations",
    ],
    soft: &[
        "Critical Thinking",
        "Communication",
        "Negotiation",
        "Public Speaking",
        "Strategic Thinking",
        "Diplomacy",
        "Leadership",
        "Networking",
        "Persuasion",
        "Cultural Awareness",
        "Adaptability",
        "Ethics",
        "Debate Skills",
    ],
};

const STATISTICS: FieldSkillSet = FieldSkillSet {
    hard: &[
        "Statistical Modeling",
        "R",
        "Python",
        "SAS",
        "SPSS",
        "Probability Theory",
        "Hypothesis Testing",
        "Regression Analysis",
        "Experimental Design",
        "Sampling Methods",
        "Time Series Analysis",
        "Bayesian Statistics",
        "Survey Design",
        "Data Analysis",
        "Statistical Software",
        "Machine Learning",
        "Data Visualization",
        "SQL",
    ],
    soft: &[
        "Analytical Thinking",
        "Attention to Detail",
        "Problem Solving",
        "Communication",
        "Critical Thinking",
        "Research Skills",
        "Report Writing",
        "Presentation Skills",
        "Collaboration",
        "Time Management",
        "Logical Reasoning",
    ],
};

const PR: FieldSkillSet = FieldSkillSet {
    hard: &[
        "Media Relations",
        "Press Release Writing",
        "Crisis Communication",
        "Social Media Management",
        "Event Planning",
        "Content Creation",
        "Brand Management",
        "Digital Marketing",
        "Media Monitoring",
        "SEO",
        "Analytics Tools",
        "Adobe Creative Suite",
        "Campaign Management",
        "Influencer Relations",
        "Copywriting",
        "Public Speaking",
        "Strategic Communication",
    ],
    soft: &[
        "Communication",
        "Creativity",
        "Relationship Building",
        "Adaptability",
        "Crisis Management",
        "Strategic Thinking",
        "Networking",
        "Persuasion",
        "Multitasking",
        "Emotional Intelligence",
        "Attention to Detail",
        "Storytelling",
    ],
};

impl Field {
    /// Skills vocabulary for this field.
    pub fn skill_set(&self) -> &'static FieldSkillSet {
        match self {
            Field::DataAnalysis => &DATA_ANALYSIS,
            Field::Economics => &ECONOMICS,
            Field::Hr => &HR,
            Field::Politics => &POLITICS,
            Field::Statistics => &STATISTICS,
            Field::Pr => &PR,
        }
    }
}
