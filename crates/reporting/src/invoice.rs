//! KOL invoices — numbering, line-item totals and payment progress.

use chrono::{Datelike, Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Days between issue date and the default due date.
pub const DEFAULT_PAYMENT_TERM_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: Uuid,
    pub description: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

impl InvoiceItem {
    pub fn new(description: impl Into<String>, quantity: u32, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            quantity,
            price,
            total: f64::from(quantity) * price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub amount: f64,
    pub paid_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub items: Vec<InvoiceItem>,
    pub total_amount: f64,
    pub status: InvoiceStatus,
    pub due_date: NaiveDate,
    pub issued_date: NaiveDate,
    #[serde(default)]
    pub kol_id: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// `INV-{YYYY}{MM}-{NNN}` with a random three-digit suffix (100–999).
pub fn generate_invoice_number<R: Rng>(issued: NaiveDate, rng: &mut R) -> String {
    let suffix: u16 = rng.gen_range(100..=999);
    format!("INV-{}{:02}-{}", issued.year(), issued.month(), suffix)
}

impl Invoice {
    /// New draft dated `issued`, due after the default payment term.
    pub fn draft<R: Rng>(
        recipient_name: impl Into<String>,
        recipient_address: impl Into<String>,
        items: Vec<InvoiceItem>,
        issued: NaiveDate,
        rng: &mut R,
    ) -> Self {
        let total_amount = items.iter().map(|i| i.total).sum();
        Self {
            id: Uuid::new_v4(),
            invoice_number: generate_invoice_number(issued, rng),
            recipient_name: recipient_name.into(),
            recipient_address: recipient_address.into(),
            items,
            total_amount,
            status: InvoiceStatus::Draft,
            due_date: issued + Duration::days(DEFAULT_PAYMENT_TERM_DAYS),
            issued_date: issued,
            kol_id: None,
            campaign_id: None,
            payments: Vec::new(),
        }
    }

    pub fn total_paid(&self) -> f64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// May go negative on overpayment.
    pub fn remaining_balance(&self) -> f64 {
        self.total_amount - self.total_paid()
    }

    /// Paid share of the total, capped at 100. 0 for a zero-total invoice.
    pub fn paid_percentage(&self) -> f64 {
        if self.total_amount > 0.0 {
            (self.total_paid() / self.total_amount * 100.0).min(100.0)
        } else {
            0.0
        }
    }

    /// Record a payment. Settles the invoice once payments cover the total.
    pub fn record_payment(&mut self, amount: f64, paid_on: NaiveDate) {
        self.payments.push(Payment { amount, paid_on });
        if self.total_paid() >= self.total_amount && self.status != InvoiceStatus::Paid {
            self.status = InvoiceStatus::Paid;
        }
    }

    /// An unpaid invoice whose due date has passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != InvoiceStatus::Paid && self.due_date < today
    }
}
