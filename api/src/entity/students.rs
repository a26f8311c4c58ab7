use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub roll_number: String,
    #[sea_orm(unique)]
    pub email: String,
    pub department: String,
    pub year: Option<i32>,
    pub profile_pic: Option<String>,
    /// `[{"name": ..., "profileUrl": ...}]`
    pub platforms: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::platform_stats::Entity")]
    PlatformStats,
}

impl Related<super::platform_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlatformStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
