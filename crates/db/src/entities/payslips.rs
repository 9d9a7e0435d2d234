//! `SeaORM` Entity for payslips table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payslips")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub employee_id: Uuid,
    pub number: Option<String>,
    pub date_from: Date,
    pub date_to: Date,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub gross_wage: Decimal,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub net_wage: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::Id"
    )]
    Employees,
    #[sea_orm(has_many = "super::payslip_lines::Entity")]
    PayslipLines,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::payslip_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayslipLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
