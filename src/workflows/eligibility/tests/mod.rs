mod common;
mod determination;
mod questionnaire;
