#![forbid(unsafe_code)]

//! Profile page field layout and the mock employee it starts with.

use crate::form::{FieldKind, FieldSpec, FormSection, FormSpec};

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];
pub const YES_NO: &[&str] = &["Yes", "No"];

pub mod fields {
    pub const EMPLOYEE_NAME: &str = "employee_name";
    pub const MOBILE: &str = "mobile";
    pub const GENDER: &str = "gender";
    pub const DATE_OF_BIRTH: &str = "date_of_birth";
    pub const AREA: &str = "area";
    pub const LANDMARK: &str = "landmark";
    pub const COMMUNICATION_ADDRESS: &str = "communication_address";
    pub const CUSER_ID: &str = "cuser_id";
    pub const PRIMARY_SKILL: &str = "primary_skill";
    pub const RSA_CARD_NO: &str = "rsa_card_no";
    pub const RSA_CARD_EXPIRY: &str = "rsa_card_expiry";
    pub const PROJECT_EXPERIENCE: &str = "project_experience";
    pub const CLIENT_EMAIL_ID: &str = "client_email_id";
    pub const AVAIL_TRANSPORT: &str = "avail_transport";
    pub const SECONDARY_SKILLS: &str = "secondary_skills";
    pub const XYZ_EMPLOYEE_ID: &str = "xyz_employee_id";
    pub const XYZ_JOINING_DATE: &str = "xyz_joining_date";
    pub const DESIGNATION: &str = "designation";
    pub const GRADE: &str = "grade";
    pub const XYZ_EMAIL_ID: &str = "xyz_email_id";
    pub const XYZ_CARD_NO: &str = "xyz_card_no";
    pub const IT_EXPERIENCE_BEFORE_XYZ: &str = "it_experience_before_xyz";
    pub const ABC_EXPERIENCE_ON_ROLL: &str = "abc_experience_on_roll";
}

const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        key,
        label,
        kind,
        required: false,
        placeholder: "",
    }
}

pub const PROFILE_FORM: FormSpec = FormSpec {
    id: "profile",
    submit_label: "Save Changes",
    sections: &[
        FormSection {
            title: "Employee Details",
            description: "Personal and contact information",
            fields: &[
                optional(fields::EMPLOYEE_NAME, "Employee Name", FieldKind::Text),
                optional(fields::MOBILE, "Mobile", FieldKind::Text),
                optional(fields::GENDER, "Gender", FieldKind::Select(GENDERS)),
                optional(fields::DATE_OF_BIRTH, "Date of Birth", FieldKind::Date),
                optional(fields::AREA, "Area", FieldKind::Text),
                optional(fields::LANDMARK, "Landmark", FieldKind::Text),
                optional(
                    fields::COMMUNICATION_ADDRESS,
                    "Communication Address",
                    FieldKind::TextArea,
                ),
            ],
        },
        FormSection {
            title: "Project Details",
            description: "Project-related information and skills",
            fields: &[
                optional(fields::CUSER_ID, "CUser ID", FieldKind::Text),
                optional(fields::PRIMARY_SKILL, "Primary Skill", FieldKind::Text),
                optional(fields::RSA_CARD_NO, "RSA Card No", FieldKind::Text),
                optional(
                    fields::RSA_CARD_EXPIRY,
                    "RSA Card Expiry Date",
                    FieldKind::Date,
                ),
                optional(
                    fields::PROJECT_EXPERIENCE,
                    "Project Experience",
                    FieldKind::Text,
                ),
                optional(fields::CLIENT_EMAIL_ID, "Client Email ID", FieldKind::Email),
                optional(
                    fields::AVAIL_TRANSPORT,
                    "Avail Transport",
                    FieldKind::Select(YES_NO),
                ),
                optional(
                    fields::SECONDARY_SKILLS,
                    "Secondary Skills/Tools",
                    FieldKind::TextArea,
                ),
            ],
        },
        FormSection {
            title: "Company Details",
            description: "Employment and organizational information",
            fields: &[
                optional(fields::XYZ_EMPLOYEE_ID, "XYZ Employee ID", FieldKind::Text),
                optional(fields::XYZ_JOINING_DATE, "XYZ Joining Date", FieldKind::Date),
                optional(fields::DESIGNATION, "Designation", FieldKind::Text),
                optional(fields::GRADE, "Grade", FieldKind::Text),
                optional(fields::XYZ_EMAIL_ID, "XYZ Email ID", FieldKind::Email),
                optional(fields::XYZ_CARD_NO, "XYZ Card No", FieldKind::Text),
                optional(
                    fields::IT_EXPERIENCE_BEFORE_XYZ,
                    "IT Experience Before XYZ (months)",
                    FieldKind::Number,
                ),
                optional(
                    fields::ABC_EXPERIENCE_ON_ROLL,
                    "ABC Experience on Roll (months)",
                    FieldKind::Number,
                ),
            ],
        },
    ],
    date_ranges: &[],
};

/// Initial text values of the profile page. Date fields start unset.
pub const PROFILE_SEED_VALUES: &[(&str, &str)] = &[
    (fields::EMPLOYEE_NAME, "Shruthi"),
    (fields::MOBILE, "+91 9876543210"),
    (fields::GENDER, "Female"),
    (fields::AREA, "Electronic City"),
    (fields::LANDMARK, "Near Metro Station"),
    (fields::COMMUNICATION_ADDRESS, "123 Tech Street"),
    (fields::CUSER_ID, "CUSER001"),
    (fields::PRIMARY_SKILL, "React Development"),
    (fields::RSA_CARD_NO, "RSA123456"),
    (fields::PROJECT_EXPERIENCE, "3 years"),
    (fields::CLIENT_EMAIL_ID, "client@company.com"),
    (fields::AVAIL_TRANSPORT, "Yes"),
    (fields::SECONDARY_SKILLS, "Node.js, TypeScript, MongoDB"),
    (fields::XYZ_EMPLOYEE_ID, "XYZ001"),
    (fields::DESIGNATION, "Senior Software Engineer"),
    (fields::GRADE, "L3"),
    (fields::XYZ_EMAIL_ID, "shruthi@xyz.com"),
    (fields::XYZ_CARD_NO, "XYZ789"),
    (fields::IT_EXPERIENCE_BEFORE_XYZ, "24"),
    (fields::ABC_EXPERIENCE_ON_ROLL, "36"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_profile_contract_01_seed_values_name_known_text_fields() {
        for (key, value) in PROFILE_SEED_VALUES {
            let field = PROFILE_FORM.field(key).expect("seed key must exist");
            assert!(!field.kind.is_date());
            if let FieldKind::Select(options) = field.kind {
                assert!(options.contains(value));
            }
        }
    }

    #[test]
    fn at_profile_contract_02_three_sections_nothing_required() {
        assert_eq!(PROFILE_FORM.sections.len(), 3);
        assert_eq!(PROFILE_FORM.required_fields().count(), 0);
        assert_eq!(PROFILE_FORM.fields().filter(|f| f.kind.is_date()).count(), 3);
    }
}
