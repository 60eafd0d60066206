use crate::answers::value::{AnswerValue, FieldSpec};
use crate::constants::{DEFAULT_CODE_OF_CONDUCT, DEFAULT_LICENSE};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// Declares the answer fields once and derives everything that walks them:
/// the struct, its defaults, the field table, value enumeration, lookup and
/// assignment by token name.
macro_rules! answer_fields {
    ($(
        $(#[doc = $doc:literal])*
        $field:ident: $ty:ty = $token:literal => $default:expr;
    )+) => {
        /// Answers to the questions asked while scaffolding a library.
        #[derive(Debug, Clone, PartialEq)]
        pub struct AnswerRecord {
            $(
                $(#[doc = $doc])*
                pub $field: $ty,
            )+
        }

        impl Default for AnswerRecord {
            fn default() -> Self {
                Self { $($field: $default,)+ }
            }
        }

        impl AnswerRecord {
            /// Every field in declaration order.
            pub const FIELDS: &'static [FieldSpec] = &[
                $(FieldSpec { name: $token, kind: <$ty as AnswerValue>::KIND },)+
            ];

            /// Current values, positionally aligned with [`AnswerRecord::tokens`].
            pub fn values(&self) -> Vec<Value> {
                vec![$(self.$field.to_value(),)+]
            }

            /// Value of a single field by token name.
            pub fn get(&self, token: &str) -> Option<Value> {
                match token {
                    $($token => Some(self.$field.to_value()),)+
                    _ => None,
                }
            }

            /// Assigns a field by token name after checking the value's shape.
            pub fn set(&mut self, token: &str, value: Value) -> Result<()> {
                match token {
                    $($token => self.$field = <$ty as AnswerValue>::from_value($token, value)?,)+
                    _ => return Err(Error::UnknownField(token.to_string())),
                }
                Ok(())
            }
        }
    };
}

answer_fields! {
    author_email: Option<String> = "authorEmail" => None;
    author_holds_copyright: bool = "authorHoldsCopyright" => true;
    author_name: Option<String> = "authorName" => None;
    author_url: Option<String> = "authorUrl" => None;
    /// Identifier of the code of conduct to ship, e.g. `Contributor-2.1`.
    code_of_conduct: Option<String> = "codeOfConduct" => Some(DEFAULT_CODE_OF_CONDUCT.to_string());
    code_of_conduct_committee: Option<String> = "codeOfConductCommittee" => None;
    code_of_conduct_email: Option<String> = "codeOfConductEmail" => None;
    code_of_conduct_policies_url: Option<String> = "codeOfConductPoliciesUrl" => None;
    code_of_conduct_reporting_url: Option<String> = "codeOfConductReportingUrl" => None;
    copyright_email: Option<String> = "copyrightEmail" => None;
    copyright_holder: Option<String> = "copyrightHolder" => None;
    copyright_url: Option<String> = "copyrightUrl" => None;
    copyright_year: Option<String> = "copyrightYear" => None;
    github_username: Option<String> = "githubUsername" => None;
    /// SPDX identifier of the chosen license.
    license: Option<String> = "license" => Some(DEFAULT_LICENSE.to_string());
    package_description: Option<String> = "packageDescription" => None;
    package_keywords: Vec<String> = "packageKeywords" => Vec::new();
    /// Package name in `vendor/package` form.
    package_name: Option<String> = "packageName" => None;
    package_namespace: Option<String> = "packageNamespace" => None;
    project_name: Option<String> = "projectName" => None;
    security_policy: bool = "securityPolicy" => true;
    security_policy_contact_email: Option<String> = "securityPolicyContactEmail" => None;
    security_policy_contact_form_url: Option<String> = "securityPolicyContactFormUrl" => None;
    /// Accept defaults for every remaining question.
    skip_prompts: bool = "skipPrompts" => false;
    vendor_name: Option<String> = "vendorName" => None;
}

impl AnswerRecord {
    /// Field names in declaration order, for use as template tokens.
    pub fn tokens(&self) -> Vec<&'static str> {
        Self::FIELDS.iter().map(|field| field.name).collect()
    }

    /// Returns whether `token` names a field.
    pub fn is_token(token: &str) -> bool {
        Self::FIELDS.iter().any(|field| field.name == token)
    }

    /// Field name to value for every field, in declaration order.
    pub fn to_map(&self) -> IndexMap<&'static str, Value> {
        self.tokens().into_iter().zip(self.values()).collect()
    }

    /// The snapshot as a JSON object, ready to hand to a template renderer.
    pub fn context(&self) -> Value {
        Value::Object(
            self.to_map().into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        )
    }

    /// Overwrites every known field present in `answers`.
    ///
    /// Unknown keys are skipped. The first value of the wrong shape aborts the
    /// whole operation, leaving fields set before it in place.
    pub fn hydrate(&mut self, answers: serde_json::Map<String, Value>) -> Result<()> {
        for (key, value) in answers {
            if !Self::is_token(&key) {
                log::trace!("Ignoring unknown answer '{key}'");
                continue;
            }
            self.set(&key, value)?;
        }
        Ok(())
    }
}
