//! Payslip repository backing the report data source.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, error};
use uuid::Uuid;

use paysheet_core::payroll::{BankAccount, Employee, Payslip, PayslipLine};
use paysheet_core::period::PayPeriod;
use paysheet_core::source::{PayslipSource, SourceError};
use paysheet_shared::types::{EmployeeId, PayslipId, PayslipLineId};

use crate::entities::{bank_accounts, employees, payslip_lines, payslips};

/// Payslip repository for report queries.
#[derive(Debug, Clone)]
pub struct PayslipRepository {
    db: DatabaseConnection,
}

impl PayslipRepository {
    /// Creates a new payslip repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads payslips fully contained in `[date_from, date_to]` together
    /// with their employee, bank account and lines.
    ///
    /// Payslips are ordered by start date; lines keep their sequence order.
    ///
    /// # Errors
    ///
    /// Returns `DbErr` if a query fails or a payslip references a missing
    /// employee.
    pub async fn find_within(
        &self,
        date_from: NaiveDate,
        date_to: NaiveDate,
    ) -> Result<Vec<Payslip>, DbErr> {
        let slips = payslips::Entity::find()
            .filter(payslips::Column::DateFrom.gte(date_from))
            .filter(payslips::Column::DateTo.lte(date_to))
            .order_by_asc(payslips::Column::DateFrom)
            .order_by_asc(payslips::Column::Id)
            .all(&self.db)
            .await?;

        if slips.is_empty() {
            return Ok(Vec::new());
        }

        let employee_ids: BTreeSet<Uuid> = slips.iter().map(|s| s.employee_id).collect();
        let staff: HashMap<Uuid, employees::Model> = employees::Entity::find()
            .filter(employees::Column::Id.is_in(employee_ids))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();

        let bank_ids: BTreeSet<Uuid> = staff
            .values()
            .filter_map(|e| e.bank_account_id)
            .collect();
        let banks: HashMap<Uuid, bank_accounts::Model> = if bank_ids.is_empty() {
            HashMap::new()
        } else {
            bank_accounts::Entity::find()
                .filter(bank_accounts::Column::Id.is_in(bank_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|b| (b.id, b))
                .collect()
        };

        let slip_ids: Vec<Uuid> = slips.iter().map(|s| s.id).collect();
        let mut lines: HashMap<Uuid, Vec<PayslipLine>> = HashMap::new();
        for line in payslip_lines::Entity::find()
            .filter(payslip_lines::Column::PayslipId.is_in(slip_ids))
            .order_by_asc(payslip_lines::Column::PayslipId)
            .order_by_asc(payslip_lines::Column::Sequence)
            .all(&self.db)
            .await?
        {
            lines.entry(line.payslip_id).or_default().push(PayslipLine {
                id: PayslipLineId::from_uuid(line.id),
                rule_code: line.code,
                amount: line.amount,
            });
        }

        debug!(
            payslips = slips.len(),
            employees = staff.len(),
            "Loaded payslip records"
        );

        slips
            .into_iter()
            .map(|slip| {
                let employee = staff.get(&slip.employee_id).ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "employee {} of payslip {}",
                        slip.employee_id, slip.id
                    ))
                })?;
                Ok(Payslip {
                    id: PayslipId::from_uuid(slip.id),
                    employee: to_employee(employee, &banks),
                    date_from: slip.date_from,
                    date_to: slip.date_to,
                    gross_wage: slip.gross_wage,
                    net_wage: slip.net_wage,
                    lines: lines.remove(&slip.id).unwrap_or_default(),
                })
            })
            .collect()
    }
}

#[async_trait]
impl PayslipSource for PayslipRepository {
    async fn payslips_within(&self, period: &PayPeriod) -> Result<Vec<Payslip>, SourceError> {
        self.find_within(period.date_from(), period.date_to())
            .await
            .map_err(|e| {
                error!(error = %e, period = %period, "Failed to load payslips");
                SourceError(e.to_string())
            })
    }
}

fn to_employee(model: &employees::Model, banks: &HashMap<Uuid, bank_accounts::Model>) -> Employee {
    Employee {
        id: EmployeeId::from_uuid(model.id),
        name: model.name.clone(),
        registration_number: model.registration_number.clone(),
        national_id: model.identification_id.clone(),
        tax_pin: model.kra_pin.clone(),
        nssf_number: model.nssf_number.clone(),
        shif_number: model.shif_number.clone(),
        work_phone: model.work_phone.clone(),
        bank_account: model
            .bank_account_id
            .and_then(|id| banks.get(&id))
            .map(|bank| BankAccount {
                bank_name: bank.bank_name.clone(),
                branch_code: bank.bank_bic.clone(),
            }),
    }
}
