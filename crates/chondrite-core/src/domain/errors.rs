pub type ChondriteResult<T> = Result<T, ChondriteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChondriteErrorCategory {
    InputValidationError,
    ComputationError,
    InternalError,
}

impl ChondriteErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidationError => 2,
            Self::ComputationError => 4,
            Self::InternalError => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InputValidationError => "InputValidationError",
            Self::ComputationError => "ComputationError",
            Self::InternalError => "InternalError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} [{}] {}", .category.as_str(), .placeholder, .message)]
pub struct ChondriteError {
    category: ChondriteErrorCategory,
    placeholder: &'static str,
    message: String,
}

impl ChondriteError {
    pub fn new(
        category: ChondriteErrorCategory,
        placeholder: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            placeholder,
            message: message.into(),
        }
    }

    pub fn input_validation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(
            ChondriteErrorCategory::InputValidationError,
            placeholder,
            message,
        )
    }

    pub fn computation(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ChondriteErrorCategory::ComputationError, placeholder, message)
    }

    pub fn internal(placeholder: &'static str, message: impl Into<String>) -> Self {
        Self::new(ChondriteErrorCategory::InternalError, placeholder, message)
    }

    /// Prefixes the message with the class or table the failure belongs to.
    pub fn for_subject(mut self, subject: &str) -> Self {
        self.message = format!("{}: {}", subject, self.message);
        self
    }

    pub const fn category(&self) -> ChondriteErrorCategory {
        self.category
    }

    pub const fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.placeholder, self.message)
    }
}
