use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Declares a closed set of wire values plus an `Other` catch-all so that an
/// unexpected upstream string is carried through instead of rejected.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            pub fn label(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($wire => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Practice a consultant belongs to while on the bench.
    pub enum Department {
        Development => ("development", "Development"),
        Design => ("design", "Design"),
        Qa => ("qa", "Quality Assurance"),
        Devops => ("devops", "DevOps"),
        Data => ("data", "Data"),
    }
}

wire_enum! {
    /// Headline skill tag used for staffing searches.
    pub enum PrimarySkill {
        Frontend => ("frontend", "Frontend Development"),
        Backend => ("backend", "Backend Development"),
        FullStack => ("full-stack", "Full Stack Development"),
        Mobile => ("mobile", "Mobile Development"),
        Cloud => ("cloud", "Cloud & DevOps Engineering"),
        DataScience => ("data-science", "Data Science & ML"),
        TestAutomation => ("test-automation", "Test Automation"),
        UiUx => ("ui-ux", "UI/UX Design"),
    }
}

wire_enum! {
    pub enum ResumeStatus {
        Updated => ("updated", "Updated"),
        Pending => ("pending", "Pending"),
        Outdated => ("outdated", "Outdated"),
    }
}

wire_enum! {
    pub enum TrainingStatus {
        Completed => ("completed", "Completed"),
        InProgress => ("in-progress", "In Progress"),
        NotStarted => ("not-started", "Not Started"),
        Overdue => ("overdue", "Overdue"),
    }
}

/// One bench entry as supplied by the roster data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: Department,
    pub primary_skill: PrimarySkill,
    pub resume_status: ResumeStatus,
    pub attendance_rate: f64,
    pub training_status: TrainingStatus,
    pub opportunities_count: u32,
    pub bench_start_date: NaiveDate,
}
