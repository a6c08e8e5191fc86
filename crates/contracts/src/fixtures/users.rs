use crate::domain::user::{Permission, Role, User, UserStatus, WILDCARD_PERMISSION};
use once_cell::sync::Lazy;

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "USR001".into(),
            name: "Sarah Wilson".into(),
            email: "sarah.wilson@company.com".into(),
            phone: Some("+1-555-0123".into()),
            role: "Compliance Manager".into(),
            department: "Compliance".into(),
            status: UserStatus::Active,
            last_login: Some("2024-12-14T10:30:00Z".into()),
            created_at: "2024-01-15T09:00:00Z".into(),
            permissions: vec![
                "view_suppliers".into(),
                "edit_suppliers".into(),
                "approve_documents".into(),
                "generate_reports".into(),
            ],
            two_factor_enabled: true,
            session_count: 2,
        },
        User {
            id: "USR002".into(),
            name: "John Doe".into(),
            email: "john.doe@company.com".into(),
            phone: Some("+1-555-0124".into()),
            role: "System Admin".into(),
            department: "IT".into(),
            status: UserStatus::Active,
            last_login: Some("2024-12-14T09:45:00Z".into()),
            created_at: "2024-01-10T08:30:00Z".into(),
            permissions: vec![WILDCARD_PERMISSION.into()],
            two_factor_enabled: true,
            session_count: 1,
        },
        User {
            id: "USR003".into(),
            name: "Mike Johnson".into(),
            email: "mike.johnson@company.com".into(),
            phone: None,
            role: "Auditor".into(),
            department: "Audit".into(),
            status: UserStatus::Active,
            last_login: Some("2024-12-13T16:20:00Z".into()),
            created_at: "2024-02-01T10:00:00Z".into(),
            permissions: vec![
                "view_suppliers".into(),
                "view_documents".into(),
                "view_audit_trail".into(),
                "generate_reports".into(),
            ],
            two_factor_enabled: false,
            session_count: 0,
        },
        User {
            id: "USR004".into(),
            name: "Emma Davis".into(),
            email: "emma.davis@company.com".into(),
            phone: None,
            role: "Supplier Coordinator".into(),
            department: "Procurement".into(),
            status: UserStatus::Pending,
            last_login: None,
            created_at: "2024-12-10T14:00:00Z".into(),
            permissions: vec!["view_suppliers".into(), "edit_supplier_basic".into()],
            two_factor_enabled: false,
            session_count: 0,
        },
    ]
});

static ROLES: Lazy<Vec<Role>> = Lazy::new(|| {
    vec![
        Role {
            id: "ROL001".into(),
            name: "System Admin".into(),
            description: "Full system access with all permissions".into(),
            permissions: vec![WILDCARD_PERMISSION.into()],
            user_count: 1,
            is_system: true,
        },
        Role {
            id: "ROL002".into(),
            name: "Compliance Manager".into(),
            description: "Manage compliance processes and approve documents".into(),
            permissions: vec![
                "view_suppliers".into(),
                "edit_suppliers".into(),
                "approve_documents".into(),
                "generate_reports".into(),
                "manage_workflows".into(),
            ],
            user_count: 1,
            is_system: false,
        },
        Role {
            id: "ROL003".into(),
            name: "Auditor".into(),
            description: "View-only access for audit and reporting purposes".into(),
            permissions: vec![
                "view_suppliers".into(),
                "view_documents".into(),
                "view_audit_trail".into(),
                "generate_reports".into(),
            ],
            user_count: 1,
            is_system: false,
        },
        Role {
            id: "ROL004".into(),
            name: "Supplier Coordinator".into(),
            description: "Basic supplier management and data entry".into(),
            permissions: vec![
                "view_suppliers".into(),
                "edit_supplier_basic".into(),
                "upload_documents".into(),
            ],
            user_count: 1,
            is_system: false,
        },
    ]
});

static PERMISSIONS: Lazy<Vec<Permission>> = Lazy::new(|| {
    [
        ("PRM001", "view_suppliers", "View supplier information", "Suppliers"),
        ("PRM002", "edit_suppliers", "Edit supplier details", "Suppliers"),
        ("PRM003", "delete_suppliers", "Delete suppliers", "Suppliers"),
        ("PRM004", "approve_documents", "Approve supplier documents", "Documents"),
        ("PRM005", "upload_documents", "Upload documents", "Documents"),
        ("PRM006", "view_audit_trail", "View audit logs", "Audit"),
        ("PRM007", "generate_reports", "Generate and download reports", "Reports"),
        ("PRM008", "manage_workflows", "Create and manage workflows", "Workflows"),
        ("PRM009", "manage_users", "Manage user accounts", "Administration"),
        ("PRM010", "system_settings", "Modify system settings", "Administration"),
    ]
    .iter()
    .map(|(id, name, description, category)| Permission {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        is_system: true,
    })
    .collect()
});

pub fn all() -> Vec<User> {
    USERS.clone()
}

pub fn roles() -> Vec<Role> {
    ROLES.clone()
}

pub fn permissions() -> Vec<Permission> {
    PERMISSIONS.clone()
}

/// Distinct role names for the role dropdown, in fixture order.
pub fn role_names() -> Vec<String> {
    ROLES.iter().map(|role| role.name.clone()).collect()
}
