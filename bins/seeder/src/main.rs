//! Database seeder for Paysheet development and testing.
//!
//! Seeds a bank account, three employees and one payslip per employee for the
//! current month, so every payroll report has rows to show.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Datelike, Local, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use paysheet_db::entities::{bank_accounts, employees, payslip_lines, payslips};

/// Demo bank account ID (stable across runs).
const BANK_ACCOUNT_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0101);

struct DemoEmployee {
    id: Uuid,
    name: &'static str,
    registration_number: &'static str,
    kra_pin: &'static str,
    has_bank_account: bool,
    gross: Decimal,
}

const EMPLOYEES: [DemoEmployee; 3] = [
    DemoEmployee {
        id: Uuid::from_u128(0x0201),
        name: "Jane Wanjiru Doe",
        registration_number: "EMP-001",
        kra_pin: "A000000001P",
        has_bank_account: true,
        gross: Decimal::from_parts(150_000, 0, 0, false, 0),
    },
    DemoEmployee {
        id: Uuid::from_u128(0x0202),
        name: "John Otieno Smith",
        registration_number: "EMP-002",
        kra_pin: "A000000002Q",
        has_bank_account: true,
        gross: Decimal::from_parts(95_000, 0, 0, false, 0),
    },
    DemoEmployee {
        id: Uuid::from_u128(0x0203),
        name: "Madonna",
        registration_number: "EMP-003",
        kra_pin: "A000000003R",
        has_bank_account: false,
        gross: Decimal::from_parts(60_000, 0, 0, false, 0),
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = paysheet_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    println!("Seeding bank account...");
    seed_bank_account(&db).await?;

    println!("Seeding employees...");
    seed_employees(&db).await?;

    println!("Seeding payslips...");
    seed_payslips(&db, Local::now().date_naive()).await?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed_bank_account(db: &DatabaseConnection) -> anyhow::Result<()> {
    if bank_accounts::Entity::find_by_id(BANK_ACCOUNT_ID)
        .one(db)
        .await?
        .is_some()
    {
        println!("  Bank account already exists, skipping...");
        return Ok(());
    }

    bank_accounts::ActiveModel {
        id: Set(BANK_ACCOUNT_ID),
        account_number: Set("0100000000001".to_string()),
        bank_name: Set(Some("Demo Bank".to_string())),
        bank_bic: Set(Some("DEMOKENA".to_string())),
        created_at: Set(Utc::now().into()),
    }
    .insert(db)
    .await?;
    println!("  Created bank account: Demo Bank");
    Ok(())
}

async fn seed_employees(db: &DatabaseConnection) -> anyhow::Result<()> {
    for (index, demo) in EMPLOYEES.iter().enumerate() {
        if employees::Entity::find_by_id(demo.id).one(db).await?.is_some() {
            println!("  Employee {} already exists, skipping...", demo.name);
            continue;
        }

        employees::ActiveModel {
            id: Set(demo.id),
            name: Set(demo.name.to_string()),
            registration_number: Set(Some(demo.registration_number.to_string())),
            identification_id: Set(Some(format!("2000000{index}"))),
            kra_pin: Set(Some(demo.kra_pin.to_string())),
            nssf_number: Set(Some(format!("NSSF-{:04}", index + 1))),
            shif_number: Set(Some(format!("SHIF-{:04}", index + 1))),
            work_phone: Set(Some(format!("+25470000000{index}"))),
            bank_account_id: Set(demo.has_bank_account.then_some(BANK_ACCOUNT_ID)),
            created_at: Set(Utc::now().into()),
            updated_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;
        println!("  Created employee: {}", demo.name);
    }
    Ok(())
}

/// Seeds one payslip per employee covering the month of `today`.
async fn seed_payslips(db: &DatabaseConnection, today: NaiveDate) -> anyhow::Result<()> {
    let date_from = today.with_day(1).context("Invalid month start")?;
    let date_to = date_from
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .context("Invalid month end")?;

    for demo in &EMPLOYEES {
        let existing = payslips::Entity::find()
            .filter(payslips::Column::EmployeeId.eq(demo.id))
            .filter(payslips::Column::DateFrom.eq(date_from))
            .one(db)
            .await?;
        if existing.is_some() {
            println!("  Payslip for {} already exists, skipping...", demo.name);
            continue;
        }

        let lines = demo_lines(demo.gross);
        let deductions: Decimal = lines
            .iter()
            .filter(|(code, _)| matches!(*code, "PAYE" | "NSSF_AMOUNT" | "SHA" | "AHL_AMOUNT"))
            .map(|(_, amount)| *amount)
            .sum();

        let payslip_id = Uuid::new_v4();
        payslips::ActiveModel {
            id: Set(payslip_id),
            employee_id: Set(demo.id),
            number: Set(Some(format!(
                "SLIP/{}/{}",
                date_from.format("%Y/%m"),
                demo.registration_number
            ))),
            date_from: Set(date_from),
            date_to: Set(date_to),
            gross_wage: Set(demo.gross),
            net_wage: Set(demo.gross - deductions),
            created_at: Set(Utc::now().into()),
        }
        .insert(db)
        .await?;

        for (sequence, (code, amount)) in (1..).zip(lines) {
            payslip_lines::ActiveModel {
                id: Set(Uuid::new_v4()),
                payslip_id: Set(payslip_id),
                sequence: Set(sequence),
                code: Set(code.to_string()),
                name: Set(code.replace('_', " ")),
                amount: Set(amount),
            }
            .insert(db)
            .await?;
        }
        println!("  Created payslip for {} ({date_from} to {date_to})", demo.name);
    }
    Ok(())
}

/// Demo salary rule lines derived from the gross wage (rates in basis points).
fn demo_lines(gross: Decimal) -> Vec<(&'static str, Decimal)> {
    let basis_points = |rate: i64| (gross * Decimal::new(rate, 4)).round_dp(2);
    vec![
        ("NSSF_AMOUNT", Decimal::new(2160, 0)),
        ("SHA", basis_points(275)),
        ("AHL_AMOUNT", basis_points(150)),
        ("AHL_AMOUNT_EMP", basis_points(150)),
        ("AHL RELIEF", basis_points(150) * Decimal::new(15, 2)),
        ("PERS_RELIEF", Decimal::new(2400, 0)),
        ("PAYE", basis_points(2500)),
    ]
}
