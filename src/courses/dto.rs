use serde::Deserialize;
use serde_json::Value;

use super::repo_types::NewCourse;
use crate::{
    error::AppError,
    validation::{optional, Validator},
};

/// Body of POST and PUT /courses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub estimated_time: Option<Value>,
    pub materials_needed: Option<Value>,
}

impl CourseRequest {
    pub fn validate(self) -> Result<NewCourse, AppError> {
        let mut v = Validator::default();
        let title = v.required("title", self.title);
        let description = v.required("description", self.description);

        match (title, description) {
            (Some(title), Some(description)) if v.is_empty() => Ok(NewCourse {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                estimated_time: optional(self.estimated_time),
                materials_needed: optional(self.materials_needed),
            }),
            _ => Err(v.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_title_and_description() {
        match CourseRequest::default().validate().unwrap_err() {
            AppError::Validation(msgs) => assert_eq!(
                msgs,
                vec![
                    "Please provide a value for \"title\"".to_string(),
                    "Please provide a value for \"description\"".to_string(),
                ]
            ),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn optional_fields_pass_through() {
        let course = CourseRequest {
            title: Some("Learn How to Program".into()),
            description: Some("  In this course, you'll learn how to write code.\n".into()),
            estimated_time: Some(Value::from(12)),
            materials_needed: Some("* Notebook computer".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(course.estimated_time, None);
        assert_eq!(course.description, "In this course, you'll learn how to write code.");
        assert_eq!(course.materials_needed.as_deref(), Some("* Notebook computer"));
    }
}
