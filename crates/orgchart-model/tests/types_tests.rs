//! Tests for record types and serialization.

use orgchart_model::{Designation, Employee, ValidationError};

#[test]
fn designation_serde_round_trip() {
    let designation = Designation::new("Director", 1.0);
    let json = serde_json::to_string(&designation).unwrap();
    let back: Designation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, designation);
}

#[test]
fn employee_serde_round_trip() {
    let designation = Designation::new("Manager", 2.0);
    let boss = Employee::new("Thor", designation.id, None);
    let employee = Employee::new("Iron Man", designation.id, Some(boss.id));

    let json = serde_json::to_string(&employee).unwrap();
    let back: Employee = serde_json::from_str(&json).unwrap();
    assert_eq!(back, employee);
    assert_eq!(back.manager, Some(boss.id));
}

#[test]
fn absent_manager_serializes_as_null() {
    let designation = Designation::new("Director", 1.0);
    let employee = Employee::new("Thor", designation.id, None);
    let json = serde_json::to_value(&employee).unwrap();
    assert!(json["manager"].is_null());
}

#[test]
fn validation_errors_render_field_names() {
    let err = ValidationError::EmptyField { field: "title" };
    assert!(err.to_string().contains("title"));

    let err = ValidationError::TooShort {
        field: "name",
        min: 2,
        len: 1,
    };
    assert!(err.to_string().contains("at least 2"));
}
