//! Selectable values on the create-document form.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Kind of banking document being created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    LoanAgreement,
    CreditAssessment,
    MortgageContract,
    ClientOnboarding,
    AnnualReport,
    AuditReport,
    EmployeeContract,
    ServiceAgreement,
}

impl DocumentType {
    pub const ALL: [Self; 8] = [
        Self::LoanAgreement,
        Self::CreditAssessment,
        Self::MortgageContract,
        Self::ClientOnboarding,
        Self::AnnualReport,
        Self::AuditReport,
        Self::EmployeeContract,
        Self::ServiceAgreement,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::LoanAgreement => "loan-agreement",
            Self::CreditAssessment => "credit-assessment",
            Self::MortgageContract => "mortgage-contract",
            Self::ClientOnboarding => "client-onboarding",
            Self::AnnualReport => "annual-report",
            Self::AuditReport => "audit-report",
            Self::EmployeeContract => "employee-contract",
            Self::ServiceAgreement => "service-agreement",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::LoanAgreement => "Loan Agreement",
            Self::CreditAssessment => "Credit Assessment",
            Self::MortgageContract => "Mortgage Contract",
            Self::ClientOnboarding => "Client Onboarding",
            Self::AnnualReport => "Annual Report",
            Self::AuditReport => "Audit Report",
            Self::EmployeeContract => "Employee Contract",
            Self::ServiceAgreement => "Service Agreement",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

/// A `(slug, label)` pair offered by a select box.
pub type SelectOption = (&'static str, &'static str);

pub const CLIENTS: &[SelectOption] = &[
    ("johnson-enterprises", "Johnson Enterprises"),
    ("smith-family-trust", "Smith Family Trust"),
    ("emily-parker", "Emily Parker"),
    ("tech-solutions-inc", "Tech Solutions Inc."),
    ("global-finance-corp", "Global Finance Corp"),
    ("internal", "Internal"),
    ("hr-department", "HR Department"),
    ("cloud-systems-ltd", "Cloud Systems Ltd"),
];

pub const ASSIGNEES: &[SelectOption] = &[
    ("alex-johnson", "Alex Johnson"),
    ("sarah-williams", "Sarah Williams"),
    ("michael-chen", "Michael Chen"),
    ("emma-davis", "Emma Davis"),
    ("robert-smith", "Robert Smith"),
    ("jennifer-lee", "Jennifer Lee"),
    ("david-miller", "David Miller"),
    ("lisa-garcia", "Lisa Garcia"),
];

/// Label for `slug` in `options`, if offered.
#[must_use]
pub fn label_for(options: &[SelectOption], slug: &str) -> Option<&'static str> {
    options.iter().find(|(candidate, _)| *candidate == slug).map(|(_, label)| *label)
}
