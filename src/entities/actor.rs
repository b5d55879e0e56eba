use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub birth_year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cast::Entity")]
    Cast,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        super::cast::Relation::Movie.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cast::Relation::Actor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
