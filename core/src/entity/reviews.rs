use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub rating_safety: i32,
    pub rating_entry: i32,
    pub rating_door: i32,
    pub rating_table: i32,
    pub rating_bathroom: i32,
    pub rating_path: i32,
    pub content: Option<String>,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub hidden: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
