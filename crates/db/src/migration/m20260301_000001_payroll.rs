//! Payroll schema.
//!
//! Creates employees, bank accounts, payslips and payslip lines.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(PAYROLL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS payslip_lines, payslips, employees, bank_accounts CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const PAYROLL_SQL: &str = r"
CREATE TABLE bank_accounts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    account_number VARCHAR(64) NOT NULL,
    bank_name VARCHAR(255),
    bank_bic VARCHAR(32),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE employees (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    registration_number VARCHAR(64),
    identification_id VARCHAR(64),
    kra_pin VARCHAR(32),
    nssf_number VARCHAR(64),
    shif_number VARCHAR(64),
    work_phone VARCHAR(32),
    bank_account_id UUID REFERENCES bank_accounts(id) ON DELETE SET NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_employees_kra_pin ON employees(kra_pin) WHERE kra_pin IS NOT NULL;

CREATE TABLE payslips (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    employee_id UUID NOT NULL REFERENCES employees(id) ON DELETE RESTRICT,
    number VARCHAR(64),
    date_from DATE NOT NULL,
    date_to DATE NOT NULL,
    gross_wage NUMERIC(19, 4) NOT NULL DEFAULT 0,
    net_wage NUMERIC(19, 4) NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_payslip_dates CHECK (date_from <= date_to)
);

-- Containment query: date_from >= $1 AND date_to <= $2
CREATE INDEX idx_payslips_period ON payslips(date_from, date_to);
CREATE INDEX idx_payslips_employee ON payslips(employee_id);

CREATE TABLE payslip_lines (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    payslip_id UUID NOT NULL REFERENCES payslips(id) ON DELETE CASCADE,
    sequence INTEGER NOT NULL DEFAULT 0,
    code VARCHAR(64) NOT NULL,
    name VARCHAR(255) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL DEFAULT 0
);

CREATE INDEX idx_payslip_lines_payslip ON payslip_lines(payslip_id, sequence);
";
