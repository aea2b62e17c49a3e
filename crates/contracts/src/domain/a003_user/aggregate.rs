use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::common::{require_email, require_text, AggregateRoot, EntityId, ValidationError};
use crate::shared::export::TabularExport;
use crate::shared::format::initials;
use crate::shared::list_query::{
    compare_text, count_active, option_matches, slugify, ListFilter, Searchable, Sortable,
};
use crate::shared::print::Printable;

crate::label_enum! {
    /// Shared by users, roles and suppliers
    pub enum ActiveStatus {
        Active => "Active",
        Inactive => "Inactive",
    }
}

impl ActiveStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ActiveStatus::Active)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ActiveStatus::Active => ActiveStatus::Inactive,
            ActiveStatus::Inactive => ActiveStatus::Active,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "success",
            ActiveStatus::Inactive => "subtle",
        }
    }
}

/// Shown in the table until the employee signs in for the first time
pub const NEVER_LOGGED_IN: &str = "Never";

/// Staff member with access to the dashboard
///
/// `role` holds a role name as text; it is not checked against the roles store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub emp_id: String,
    pub role: String,
    pub department: String,
    pub last_login: String,
    pub status: ActiveStatus,
}

impl Employee {
    /// New employees have never logged in.
    pub fn new(id: EntityId, dto: &EmployeeDto) -> Result<Self, ValidationError> {
        let status = dto.validate()?;
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            emp_id: dto.emp_id.trim().to_string(),
            role: dto.role.trim().to_string(),
            department: dto.department.trim().to_string(),
            last_login: NEVER_LOGGED_IN.to_string(),
            status,
        })
    }

    /// Overwrites the form fields, keeps `last_login`.
    pub fn update(&mut self, dto: &EmployeeDto) -> Result<(), ValidationError> {
        let mut updated = Self::new(self.id, dto)?;
        updated.last_login = std::mem::take(&mut self.last_login);
        *self = updated;
        Ok(())
    }

    /// Avatar letters: `John Doe` -> `JD`
    pub fn avatar(&self) -> String {
        initials(&self.name)
    }
}

impl AggregateRoot for Employee {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "user"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}

pub fn demo_set() -> Vec<Employee> {
    let employee = |id, name: &str, email: &str, role: &str, department: &str, last_login: &str, status, emp_id: &str| {
        Employee {
            id,
            name: name.to_string(),
            email: email.to_string(),
            emp_id: emp_id.to_string(),
            role: role.to_string(),
            department: department.to_string(),
            last_login: last_login.to_string(),
            status,
        }
    };
    vec![
        employee(1, "John Doe", "john.doe@pharmaconnect.com", "Administrator", "IT Department", "2024-01-15 10:30 AM", ActiveStatus::Active, "EMP001"),
        employee(2, "Sarah Johnson", "sarah.johnson@pharmaconnect.com", "Inventory Manager", "Operations", "2024-01-15 09:45 AM", ActiveStatus::Active, "EMP002"),
        employee(3, "Michael Rodriguez", "michael.rodriguez@pharmaconnect.com", "Supplier Coordinator", "Procurement", "2024-01-14 04:20 PM", ActiveStatus::Inactive, "EMP003"),
    ]
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.emp_id]
    }
}

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "email" => compare_text(&self.email, &other.email),
            "emp_id" => compare_text(&self.emp_id, &other.emp_id),
            "role" => compare_text(&self.role, &other.role),
            "department" => compare_text(&self.department, &other.department),
            "last_login" => self.last_login.cmp(&other.last_login),
            "status" => self.status.label().cmp(other.status.label()),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

/// `role` holds a slug (`inventory-manager`) since roles are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: String,
    pub role: Option<String>,
    pub status: Option<ActiveStatus>,
}

impl ListFilter<Employee> for UserFilter {
    fn matches(&self, item: &Employee) -> bool {
        let role_ok = self
            .role
            .as_deref()
            .map_or(true, |slug| slugify(&item.role) == slugify(slug));
        item.matches_search(&self.search) && role_ok && option_matches(&self.status, &item.status)
    }

    fn active_count(&self) -> usize {
        count_active(&self.search, &[self.role.is_some(), self.status.is_some()])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub name: String,
    pub email: String,
    pub emp_id: String,
    pub role: String,
    pub department: String,
    pub status: String,
}

impl Default for EmployeeDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            emp_id: String::new(),
            role: String::new(),
            department: String::new(),
            status: ActiveStatus::Active.label().to_string(),
        }
    }
}

impl EmployeeDto {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            emp_id: employee.emp_id.clone(),
            role: employee.role.clone(),
            department: employee.department.clone(),
            status: employee.status.label().to_string(),
        }
    }

    pub fn validate(&self) -> Result<ActiveStatus, ValidationError> {
        require_text("Full Name", &self.name)?;
        require_email("Email", &self.email)?;
        require_text("Employee ID", &self.emp_id)?;
        require_text("Role", &self.role)?;
        require_text("Department", &self.department)?;
        ActiveStatus::from_label(&self.status).ok_or(ValidationError::Required("Status"))
    }
}

impl TabularExport for Employee {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "email", "role", "department", "lastLogin", "status", "empId"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
            self.department.clone(),
            self.last_login.clone(),
            self.status.to_string(),
            self.emp_id.clone(),
        ]
    }

    fn export_stem() -> &'static str {
        "user_data"
    }
}

impl Printable for Employee {
    fn print_headers() -> Vec<&'static str> {
        vec!["Name", "Email", "Employee ID", "Role", "Department", "Status"]
    }

    fn print_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.emp_id.clone(),
            self.role.clone(),
            self.department.clone(),
            self.status.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::ListQuery;

    fn form() -> EmployeeDto {
        EmployeeDto {
            name: "Priya Nair".into(),
            email: "priya.nair@pharmaconnect.com".into(),
            emp_id: "EMP004".into(),
            role: "Order Processor".into(),
            department: "Sales".into(),
            status: "Active".into(),
        }
    }

    #[test]
    fn test_new_user_never_logged_in() {
        let user = Employee::new(42, &form()).unwrap();
        assert_eq!(user.last_login, "Never");
        assert_eq!(user.avatar(), "PN");
    }

    #[test]
    fn test_update_keeps_last_login() {
        let mut user = demo_set().remove(0);
        let mut dto = EmployeeDto::from_employee(&user);
        dto.department = "Security".into();
        user.update(&dto).unwrap();
        assert_eq!(user.department, "Security");
        assert_eq!(user.last_login, "2024-01-15 10:30 AM");
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut dto = form();
        dto.email = "priya".into();
        assert_eq!(Employee::new(1, &dto), Err(ValidationError::InvalidEmail("Email")));
    }

    #[test]
    fn test_role_slug_filter() {
        let users = demo_set();
        let mut query = ListQuery::new(UserFilter::default());
        query.update_filter(|f| f.role = Some("inventory-manager".into()));
        let page = query.apply(&users);
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].name, "Sarah Johnson");

        query.update_filter(|f| {
            f.role = None;
            f.status = ActiveStatus::from_label("inactive");
        });
        assert_eq!(query.apply(&users).rows[0].emp_id, "EMP003");
    }

    #[test]
    fn test_search_by_emp_id_and_email() {
        let users = demo_set();
        assert!(users[1].matches_search("emp002"));
        assert!(users[2].matches_search("RODRIGUEZ@"));
        assert!(!users[0].matches_search("operations"));
    }
}
