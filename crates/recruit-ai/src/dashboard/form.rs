use super::domain::{CreateInterviewRequest, Skill};

/// Problems raised while editing or submitting an interview draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("no skill at row {0}")]
    SkillRow(usize),
    #[error("no custom question at row {0}")]
    QuestionRow(usize),
    #[error("interview name is required")]
    MissingName,
    #[error("employer email is required")]
    MissingEmployerEmail,
    #[error("employer email {0:?} is not an email address")]
    InvalidEmployerEmail(String),
    #[error("at least one skill is required")]
    NoSkills,
    #[error("skill row {0} needs a name")]
    BlankSkillName(usize),
    #[error("skill row {0} needs a description")]
    BlankSkillDescription(usize),
    #[error("custom question {0} is empty")]
    BlankQuestion(usize),
}

/// One field update applied to a draft. Row-indexed variants address the
/// skill and custom-question lists; indexes outside the list are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftCommand {
    Name(String),
    EmployerEmail(String),
    Language(String),
    CanChangeLanguage(bool),
    OnlyCodingRound(bool),
    CodingRoundRequired(bool),
    CodingLanguage(String),
    ProctoringRequired(bool),
    AddSkill,
    RemoveSkill(usize),
    SkillName(usize, String),
    SkillDescription(usize, String),
    AddQuestion,
    RemoveQuestion(usize),
    Question(usize, String),
}

/// In-progress interview creation form. Mutated exclusively through
/// [`DraftCommand`] so every update is typed; submission happens via
/// [`InterviewDraft::build`], which validates without consuming the draft so a
/// rejected submission can be corrected and retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewDraft {
    pub interview_name: String,
    pub employer_email_id: String,
    pub skills: Vec<Skill>,
    pub custom_questions: Vec<String>,
    pub interview_language: String,
    pub can_change_interview_language: bool,
    pub only_coding_round: bool,
    pub is_coding_round_required: bool,
    pub selected_coding_language: String,
    pub is_proctoring_required: bool,
}

impl Default for InterviewDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewDraft {
    /// Fresh form: one blank skill row, one blank question row, English,
    /// Python preselected for the coding round, proctoring on.
    pub fn new() -> Self {
        Self {
            interview_name: String::new(),
            employer_email_id: String::new(),
            skills: vec![Skill {
                name: String::new(),
                description: String::new(),
            }],
            custom_questions: vec![String::new()],
            interview_language: "en".to_string(),
            can_change_interview_language: false,
            only_coding_round: false,
            is_coding_round_required: false,
            selected_coding_language: "python".to_string(),
            is_proctoring_required: true,
        }
    }

    pub fn apply(&mut self, command: DraftCommand) -> Result<(), DraftError> {
        match command {
            DraftCommand::Name(value) => self.interview_name = value,
            DraftCommand::EmployerEmail(value) => self.employer_email_id = value,
            DraftCommand::Language(value) => self.interview_language = value,
            DraftCommand::CanChangeLanguage(value) => self.can_change_interview_language = value,
            DraftCommand::OnlyCodingRound(value) => self.only_coding_round = value,
            DraftCommand::CodingRoundRequired(value) => self.is_coding_round_required = value,
            DraftCommand::CodingLanguage(value) => self.selected_coding_language = value,
            DraftCommand::ProctoringRequired(value) => self.is_proctoring_required = value,
            DraftCommand::AddSkill => self.skills.push(Skill {
                name: String::new(),
                description: String::new(),
            }),
            DraftCommand::RemoveSkill(row) => {
                self.skill_at(row)?;
                self.skills.remove(row);
            }
            DraftCommand::SkillName(row, value) => self.skill_at(row)?.name = value,
            DraftCommand::SkillDescription(row, value) => self.skill_at(row)?.description = value,
            DraftCommand::AddQuestion => self.custom_questions.push(String::new()),
            DraftCommand::RemoveQuestion(row) => {
                self.question_at(row)?;
                self.custom_questions.remove(row);
            }
            DraftCommand::Question(row, value) => *self.question_at(row)? = value,
        }

        Ok(())
    }

    /// Validates the draft and produces the platform creation payload. The
    /// first problem found is returned; the draft itself is left untouched.
    pub fn build(&self) -> Result<CreateInterviewRequest, DraftError> {
        let request = CreateInterviewRequest {
            interview_name: self.interview_name.clone(),
            employer_email_id: self.employer_email_id.clone(),
            skills: self.skills.clone(),
            custom_questions: self.custom_questions.clone(),
            interview_language: self.interview_language.clone(),
            can_change_interview_language: self.can_change_interview_language,
            only_coding_round: self.only_coding_round,
            is_coding_round_required: self.is_coding_round_required,
            selected_coding_language: self.selected_coding_language.clone(),
            is_proctoring_required: self.is_proctoring_required,
        };
        validate_request(&request)?;
        Ok(request)
    }

    fn skill_at(&mut self, row: usize) -> Result<&mut Skill, DraftError> {
        self.skills.get_mut(row).ok_or(DraftError::SkillRow(row))
    }

    fn question_at(&mut self, row: usize) -> Result<&mut String, DraftError> {
        self.custom_questions
            .get_mut(row)
            .ok_or(DraftError::QuestionRow(row))
    }
}

/// Checks a creation payload against the same rules the draft form enforces.
/// The first problem found is returned.
pub fn validate_request(request: &CreateInterviewRequest) -> Result<(), DraftError> {
    if request.interview_name.trim().is_empty() {
        return Err(DraftError::MissingName);
    }

    let email = request.employer_email_id.trim();
    if email.is_empty() {
        return Err(DraftError::MissingEmployerEmail);
    }
    if !email.contains('@') {
        return Err(DraftError::InvalidEmployerEmail(email.to_string()));
    }

    if request.skills.is_empty() {
        return Err(DraftError::NoSkills);
    }
    for (row, skill) in request.skills.iter().enumerate() {
        if skill.name.trim().is_empty() {
            return Err(DraftError::BlankSkillName(row));
        }
        if skill.description.trim().is_empty() {
            return Err(DraftError::BlankSkillDescription(row));
        }
    }

    for (row, question) in request.custom_questions.iter().enumerate() {
        if question.trim().is_empty() {
            return Err(DraftError::BlankQuestion(row));
        }
    }

    Ok(())
}
