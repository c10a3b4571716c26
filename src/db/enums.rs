use diesel::backend::Backend;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use diesel::{AsExpression, FromSqlRow};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Member,
    Viewer,
}

impl FromSql<Text, Pg> for UserRole {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "admin" => Ok(UserRole::Admin),
            "member" => Ok(UserRole::Member),
            "viewer" => Ok(UserRole::Viewer),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for UserRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            UserRole::Admin => out.write_all(b"admin")?,
            UserRole::Member => out.write_all(b"member")?,
            UserRole::Viewer => out.write_all(b"viewer")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Developer,
    Product,
    Scrum,
    Other,
}

impl FromSql<Text, Pg> for UserType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "developer" => Ok(UserType::Developer),
            "product" => Ok(UserType::Product),
            "scrum" => Ok(UserType::Scrum),
            "other" => Ok(UserType::Other),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for UserType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            UserType::Developer => out.write_all(b"developer")?,
            UserType::Product => out.write_all(b"product")?,
            UserType::Scrum => out.write_all(b"scrum")?,
            UserType::Other => out.write_all(b"other")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum EpicStatus {
    Planning,
    InProgress,
    Completed,
}

impl FromSql<Text, Pg> for EpicStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "planning" => Ok(EpicStatus::Planning),
            "in_progress" => Ok(EpicStatus::InProgress),
            "completed" => Ok(EpicStatus::Completed),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for EpicStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            EpicStatus::Planning => out.write_all(b"planning")?,
            EpicStatus::InProgress => out.write_all(b"in_progress")?,
            EpicStatus::Completed => out.write_all(b"completed")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Backlog,
    Ready,
    InProgress,
    Review,
    Done,
}

impl FromSql<Text, Pg> for TaskStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "backlog" => Ok(TaskStatus::Backlog),
            "ready" => Ok(TaskStatus::Ready),
            "in_progress" => Ok(TaskStatus::InProgress),
            "review" => Ok(TaskStatus::Review),
            "done" => Ok(TaskStatus::Done),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for TaskStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            TaskStatus::Backlog => out.write_all(b"backlog")?,
            TaskStatus::Ready => out.write_all(b"ready")?,
            TaskStatus::InProgress => out.write_all(b"in_progress")?,
            TaskStatus::Review => out.write_all(b"review")?,
            TaskStatus::Done => out.write_all(b"done")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl FromSql<Text, Pg> for TaskPriority {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for TaskPriority {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            TaskPriority::Low => out.write_all(b"low")?,
            TaskPriority::Medium => out.write_all(b"medium")?,
            TaskPriority::High => out.write_all(b"high")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum ProductIdeaStatus {
    Proposed,
    UnderReview,
    Approved,
    Rejected,
    Implemented,
}

impl FromSql<Text, Pg> for ProductIdeaStatus {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "proposed" => Ok(ProductIdeaStatus::Proposed),
            "under_review" => Ok(ProductIdeaStatus::UnderReview),
            "approved" => Ok(ProductIdeaStatus::Approved),
            "rejected" => Ok(ProductIdeaStatus::Rejected),
            "implemented" => Ok(ProductIdeaStatus::Implemented),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for ProductIdeaStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ProductIdeaStatus::Proposed => out.write_all(b"proposed")?,
            ProductIdeaStatus::UnderReview => out.write_all(b"under_review")?,
            ProductIdeaStatus::Approved => out.write_all(b"approved")?,
            ProductIdeaStatus::Rejected => out.write_all(b"rejected")?,
            ProductIdeaStatus::Implemented => out.write_all(b"implemented")?,
        }
        Ok(IsNull::No)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityCategory {
    Frontend,
    Backend,
    Infrastructure,
    Data,
    Security,
    Other,
}

impl FromSql<Text, Pg> for CapabilityCategory {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "frontend" => Ok(CapabilityCategory::Frontend),
            "backend" => Ok(CapabilityCategory::Backend),
            "infrastructure" => Ok(CapabilityCategory::Infrastructure),
            "data" => Ok(CapabilityCategory::Data),
            "security" => Ok(CapabilityCategory::Security),
            "other" => Ok(CapabilityCategory::Other),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for CapabilityCategory {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            CapabilityCategory::Frontend => out.write_all(b"frontend")?,
            CapabilityCategory::Backend => out.write_all(b"backend")?,
            CapabilityCategory::Infrastructure => out.write_all(b"infrastructure")?,
            CapabilityCategory::Data => out.write_all(b"data")?,
            CapabilityCategory::Security => out.write_all(b"security")?,
            CapabilityCategory::Other => out.write_all(b"other")?,
        }
        Ok(IsNull::No)
    }
}

/// Entity kinds that can appear in the change log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Epic,
    Task,
    ProductIdea,
}

impl FromSql<Text, Pg> for EntityType {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "user" => Ok(EntityType::User),
            "epic" => Ok(EntityType::Epic),
            "task" => Ok(EntityType::Task),
            "product_idea" => Ok(EntityType::ProductIdea),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for EntityType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            EntityType::User => out.write_all(b"user")?,
            EntityType::Epic => out.write_all(b"epic")?,
            EntityType::Task => out.write_all(b"task")?,
            EntityType::ProductIdea => out.write_all(b"product_idea")?,
        }
        Ok(IsNull::No)
    }
}

impl EntityType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(EntityType::User),
            "epic" => Some(EntityType::Epic),
            "task" => Some(EntityType::Task),
            "product_idea" => Some(EntityType::ProductIdea),
            _ => None,
        }
    }
}

/// Operation labels recorded by the change log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
pub enum ChangeOperation {
    Create,
    Update,
    Delete,
    StatusChange,
    Link,
    Unlink,
}

impl FromSql<Text, Pg> for ChangeOperation {
    fn from_sql(bytes: <Pg as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "create" => Ok(ChangeOperation::Create),
            "update" => Ok(ChangeOperation::Update),
            "delete" => Ok(ChangeOperation::Delete),
            "status_change" => Ok(ChangeOperation::StatusChange),
            "link" => Ok(ChangeOperation::Link),
            "unlink" => Ok(ChangeOperation::Unlink),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<Text, Pg> for ChangeOperation {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            ChangeOperation::Create => out.write_all(b"create")?,
            ChangeOperation::Update => out.write_all(b"update")?,
            ChangeOperation::Delete => out.write_all(b"delete")?,
            ChangeOperation::StatusChange => out.write_all(b"status_change")?,
            ChangeOperation::Link => out.write_all(b"link")?,
            ChangeOperation::Unlink => out.write_all(b"unlink")?,
        }
        Ok(IsNull::No)
    }
}
