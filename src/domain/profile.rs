use crate::utils::error::Result;
use crate::utils::validation::{validate_positive, validate_range, Validate};
use serde::{Deserialize, Serialize};

/// GPA the profile form starts from before the student touches the slider.
pub const DEFAULT_GPA: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcademicLevel {
    HighSchool,
    Diploma,
    Undergraduate,
    Bachelors,
    Masters,
    Phd,
    Certification,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exam {
    Ielts,
    Toefl,
    Gre,
    Gmat,
    Sat,
    Act,
    Pte,
    Duolingo,
}

impl Exam {
    /// Inclusive score range accepted for the exam.
    pub fn score_range(&self) -> (f64, f64) {
        match self {
            Exam::Ielts => (4.0, 9.0),
            Exam::Toefl => (60.0, 120.0),
            Exam::Gre => (260.0, 340.0),
            Exam::Gmat => (400.0, 800.0),
            Exam::Sat => (800.0, 1600.0),
            Exam::Act => (1.0, 36.0),
            Exam::Pte => (10.0, 90.0),
            Exam::Duolingo => (10.0, 160.0),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Exam::Ielts => "IELTS",
            Exam::Toefl => "TOEFL",
            Exam::Gre => "GRE",
            Exam::Gmat => "GMAT",
            Exam::Sat => "SAT",
            Exam::Act => "ACT",
            Exam::Pte => "PTE",
            Exam::Duolingo => "Duolingo English Test",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestScore {
    pub exam: Exam,
    pub score: f64,
}

/// Search criteria assembled by the profile form.
///
/// Empty country or program lists mean "any". Only tuition, countries,
/// programs and GPA take part in matching; the rest is informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    pub max_tuition: Option<f64>,
    pub preferred_countries: Vec<String>,
    pub preferred_programs: Vec<String>,
    pub gpa: f64,
    pub academic_level: Option<AcademicLevel>,
    pub test_scores: Vec<TestScore>,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            max_tuition: None,
            preferred_countries: Vec::new(),
            preferred_programs: Vec::new(),
            gpa: DEFAULT_GPA,
            academic_level: None,
            test_scores: Vec::new(),
        }
    }
}

impl ProfileInput {
    pub fn with_gpa(gpa: f64) -> Self {
        Self {
            gpa,
            ..Self::default()
        }
    }

    pub fn score_for(&self, exam: Exam) -> Option<f64> {
        self.test_scores
            .iter()
            .find(|s| s.exam == exam)
            .map(|s| s.score)
    }

    /// Records a score, replacing any earlier score for the same exam.
    pub fn set_score(&mut self, exam: Exam, score: f64) {
        match self.test_scores.iter_mut().find(|s| s.exam == exam) {
            Some(existing) => existing.score = score,
            None => self.test_scores.push(TestScore { exam, score }),
        }
    }

    /// Overlays prefilled values (e.g. from a CV upload) onto the profile.
    pub fn apply_hints(&mut self, hints: &ProfileHints) {
        if let Some(level) = hints.academic_level {
            self.academic_level = Some(level);
        }
        if let Some(gpa) = hints.gpa {
            self.gpa = gpa;
        }
        for score in &hints.test_scores {
            self.set_score(score.exam, score.score);
        }
        if !hints.preferred_programs.is_empty() {
            self.preferred_programs = hints.preferred_programs.clone();
        }
    }
}

impl Validate for ProfileInput {
    fn validate(&self) -> Result<()> {
        if let Some(max_tuition) = self.max_tuition {
            validate_positive("max_tuition", max_tuition)?;
        }

        validate_range("gpa", self.gpa, 0.0, 4.0)?;

        for score in &self.test_scores {
            let (min, max) = score.exam.score_range();
            validate_range(score.exam.name(), score.score, min, max)?;
        }

        Ok(())
    }
}

/// Partial profile values suggested by an external source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileHints {
    pub academic_level: Option<AcademicLevel>,
    pub gpa: Option<f64>,
    pub test_scores: Vec<TestScore>,
    pub preferred_programs: Vec<String>,
}
