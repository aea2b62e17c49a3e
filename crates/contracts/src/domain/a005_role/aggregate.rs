use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::a003_user::aggregate::ActiveStatus;
use crate::domain::common::{require_text, AggregateRoot, EntityId, ValidationError};
use crate::shared::export::TabularExport;
use crate::shared::list_query::{
    compare_text, count_active, option_matches, ListFilter, Searchable, Sortable,
};
use crate::shared::print::Printable;

/// Named access role; users refer to it by name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub status: ActiveStatus,
}

impl Role {
    pub fn new(id: EntityId, dto: &RoleDto) -> Result<Self, ValidationError> {
        let status = dto.validate()?;
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            status,
        })
    }

    pub fn update(&mut self, dto: &RoleDto) -> Result<(), ValidationError> {
        *self = Self::new(self.id, dto)?;
        Ok(())
    }
}

impl AggregateRoot for Role {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "roles"
    }

    fn element_name() -> &'static str {
        "Role"
    }

    fn list_name() -> &'static str {
        "Roles"
    }
}

pub fn demo_set() -> Vec<Role> {
    [
        ("Administrator", "Full access to all system modules", ActiveStatus::Active),
        ("Inventory Manager", "Manages stock and products", ActiveStatus::Active),
        ("Supplier Coordinator", "Handles supplier interactions", ActiveStatus::Inactive),
        ("Order Processor", "Processes and tracks orders", ActiveStatus::Active),
        ("Report Analyst", "Generates and analyzes reports", ActiveStatus::Inactive),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description, status), id)| Role {
        id,
        name: name.to_string(),
        description: description.to_string(),
        status,
    })
    .collect()
}

impl Searchable for Role {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

impl Sortable for Role {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "description" => compare_text(&self.description, &other.description),
            "status" => self.status.label().cmp(other.status.label()),
            _ => compare_text(&self.name, &other.name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleFilter {
    pub search: String,
    pub status: Option<ActiveStatus>,
}

impl ListFilter<Role> for RoleFilter {
    fn matches(&self, item: &Role) -> bool {
        item.matches_search(&self.search) && option_matches(&self.status, &item.status)
    }

    fn active_count(&self) -> usize {
        count_active(&self.search, &[self.status.is_some()])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDto {
    pub name: String,
    pub description: String,
    pub status: String,
}

impl Default for RoleDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            status: ActiveStatus::Active.label().to_string(),
        }
    }
}

impl RoleDto {
    pub fn from_role(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
            status: role.status.label().to_string(),
        }
    }

    pub fn validate(&self) -> Result<ActiveStatus, ValidationError> {
        require_text("Role Name", &self.name)?;
        require_text("Description", &self.description)?;
        ActiveStatus::from_label(&self.status).ok_or(ValidationError::Required("Status"))
    }
}

impl TabularExport for Role {
    fn headers() -> Vec<&'static str> {
        vec!["id", "name", "description", "status"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.status.to_string(),
        ]
    }

    fn export_stem() -> &'static str {
        "roles_data"
    }
}

impl Printable for Role {
    fn print_headers() -> Vec<&'static str> {
        vec!["Role Name", "Description", "Status"]
    }

    fn print_row(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone(), self.status.to_string()]
    }
}

/// Role names offered by the user form, active roles first
pub fn role_names(roles: &[Role]) -> Vec<String> {
    let mut names: Vec<&Role> = roles.iter().collect();
    names.sort_by_key(|r| !r.status.is_active());
    names.into_iter().map(|r| r.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::ListQuery;

    #[test]
    fn test_demo_roles() {
        let roles = demo_set();
        assert_eq!(roles.len(), 5);
        assert_eq!(roles[4].id, 5);
        assert_eq!(roles[2].status, ActiveStatus::Inactive);
    }

    #[test]
    fn test_search_description() {
        let roles = demo_set();
        let mut query = ListQuery::new(RoleFilter::default());
        query.update_filter(|f| f.search = "orders".into());
        let page = query.apply(&roles);
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].name, "Order Processor");
    }

    #[test]
    fn test_status_filter() {
        let roles = demo_set();
        let mut query = ListQuery::new(RoleFilter::default());
        query.update_filter(|f| f.status = Some(ActiveStatus::Inactive));
        assert_eq!(query.apply(&roles).total, 2);
    }

    #[test]
    fn test_role_names_active_first() {
        let names = role_names(&demo_set());
        assert_eq!(names[..3], ["Administrator", "Inventory Manager", "Order Processor"]);
    }

    #[test]
    fn test_blank_description_rejected() {
        let dto = RoleDto {
            name: "Auditor".into(),
            ..RoleDto::default()
        };
        assert_eq!(Role::new(6, &dto), Err(ValidationError::Required("Description")));
    }
}
