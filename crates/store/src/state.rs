//! The persisted store state: five record collections plus id sequences.
//!
//! `StoreState` is a plain value: cloning it snapshots the whole store,
//! which is what the transaction layer relies on for rollback. All mutators
//! here are mechanical (insert/update/assign-id); business rules live in
//! `santri-core` and the repositories.

use std::collections::BTreeMap;
use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use santri_core::billing::{Invoice, InvoiceDraft, InvoiceKey, InvoiceStatus};
use santri_core::cash::{CashEntry, CashFlow};
use santri_core::payment::{Payment, PaymentInput};
use santri_core::wallet::{WalletBalance, WalletEntry, WalletEntryKind};
use santri_shared::types::{CashEntryId, InvoiceId, PaymentId, StudentId, WalletEntryId};
use serde::{Deserialize, Serialize};

/// Serial id sequences, one per collection that assigns ids.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct Sequences {
    invoice: u64,
    payment: u64,
    wallet_entry: u64,
    cash_entry: u64,
}

impl Sequences {
    fn next(counter: &mut u64) -> u64 {
        *counter += 1;
        *counter
    }
}

/// The five record collections of the ledger engine.
///
/// `BTreeMap` keeps each collection ordered by id, which the cash ledger
/// depends on: the entry with the greatest id defines the current balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    invoices: BTreeMap<InvoiceId, Invoice>,
    payments: BTreeMap<PaymentId, Payment>,
    wallet_balances: BTreeMap<StudentId, WalletBalance>,
    wallet_entries: BTreeMap<WalletEntryId, WalletEntry>,
    cash_entries: BTreeMap<CashEntryId, CashEntry>,
    sequences: Sequences,
}

impl StoreState {
    // ========== Invoices ==========

    /// Point lookup of an invoice.
    #[must_use]
    pub fn invoice(&self, id: InvoiceId) -> Option<&Invoice> {
        self.invoices.get(&id)
    }

    /// All invoices, ordered by id.
    pub fn invoices(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices.values()
    }

    /// The natural keys of every stored invoice.
    #[must_use]
    pub fn invoice_keys(&self) -> HashSet<InvoiceKey> {
        self.invoices.values().map(Invoice::key).collect()
    }

    /// Unpaid invoices of one student, ordered by id.
    pub fn unpaid_invoices(&self, student_id: StudentId) -> impl Iterator<Item = &Invoice> {
        self.invoices
            .values()
            .filter(move |invoice| invoice.student_id == student_id && invoice.is_unpaid())
    }

    /// Persists a draft as an unpaid invoice with a freshly assigned id.
    pub fn insert_invoice(&mut self, draft: InvoiceDraft) -> Invoice {
        let id = InvoiceId::from_raw(Sequences::next(&mut self.sequences.invoice));
        let invoice = Invoice {
            id,
            student_id: draft.student_id,
            component_id: draft.component_id,
            term: draft.term,
            amount: draft.amount,
            status: InvoiceStatus::Unpaid,
            due_date: draft.due_date,
            paid_date: None,
            payment_id: None,
        };
        self.invoices.insert(id, invoice.clone());
        invoice
    }

    /// Flips an invoice to paid and returns the updated record.
    ///
    /// Callers must have validated existence beforehand; a missing id here
    /// is a logic error surfaced as `None`.
    pub fn mark_invoice_paid(
        &mut self,
        id: InvoiceId,
        payment_id: PaymentId,
        paid_date: NaiveDate,
    ) -> Option<Invoice> {
        let invoice = self.invoices.get_mut(&id)?;
        invoice.mark_paid(payment_id, paid_date);
        Some(invoice.clone())
    }

    // ========== Payments ==========

    /// Point lookup of a payment.
    #[must_use]
    pub fn payment(&self, id: PaymentId) -> Option<&Payment> {
        self.payments.get(&id)
    }

    /// Payments not yet deposited into cash, ordered by id.
    pub fn undeposited_payments(&self) -> impl Iterator<Item = &Payment> {
        self.payments
            .values()
            .filter(|payment| !payment.deposited_to_cash)
    }

    /// Persists a new payment with a freshly assigned id.
    pub fn insert_payment(
        &mut self,
        invoice_ids: Vec<InvoiceId>,
        input: &PaymentInput,
        total_amount: Decimal,
    ) -> Payment {
        let id = PaymentId::from_raw(Sequences::next(&mut self.sequences.payment));
        let payment = Payment {
            id,
            invoice_ids,
            date: input.date,
            method: input.method.clone(),
            received_by: input.received_by.clone(),
            note: input.note.clone(),
            total_amount,
            deposited_to_cash: false,
        };
        self.payments.insert(id, payment.clone());
        payment
    }

    /// Flags a payment as deposited into cash and returns the updated
    /// record.
    pub fn mark_payment_deposited(&mut self, id: PaymentId) -> Option<Payment> {
        let payment = self.payments.get_mut(&id)?;
        payment.deposited_to_cash = true;
        Some(payment.clone())
    }

    // ========== Student wallet ==========

    /// Current wallet balance of a student, defaulting to zero when the
    /// student has no wallet history yet.
    #[must_use]
    pub fn wallet_balance(&self, student_id: StudentId) -> Decimal {
        self.wallet_balances
            .get(&student_id)
            .map_or(Decimal::ZERO, |balance| balance.balance)
    }

    /// Upserts the materialized wallet balance of a student.
    pub fn upsert_wallet_balance(&mut self, student_id: StudentId, balance: Decimal) {
        self.wallet_balances
            .insert(student_id, WalletBalance { student_id, balance });
    }

    /// Wallet entries of one student, ordered by id.
    pub fn wallet_entries(&self, student_id: StudentId) -> impl Iterator<Item = &WalletEntry> {
        self.wallet_entries
            .values()
            .filter(move |entry| entry.student_id == student_id)
    }

    /// Appends a wallet ledger entry with a freshly assigned id.
    pub fn insert_wallet_entry(
        &mut self,
        student_id: StudentId,
        timestamp: DateTime<Utc>,
        kind: WalletEntryKind,
        amount: Decimal,
        note: String,
        balance_after: Decimal,
    ) -> WalletEntry {
        let id = WalletEntryId::from_raw(Sequences::next(&mut self.sequences.wallet_entry));
        let entry = WalletEntry {
            id,
            student_id,
            timestamp,
            kind,
            amount,
            note,
            balance_after,
        };
        self.wallet_entries.insert(id, entry.clone());
        entry
    }

    // ========== Cash ==========

    /// The most recent cash entry (greatest id), if any.
    #[must_use]
    pub fn last_cash_entry(&self) -> Option<&CashEntry> {
        self.cash_entries.values().next_back()
    }

    /// Current cash balance: the last entry's balance-after, or zero for an
    /// empty ledger.
    #[must_use]
    pub fn cash_balance(&self) -> Decimal {
        self.last_cash_entry()
            .map_or(Decimal::ZERO, |entry| entry.balance_after)
    }

    /// All cash entries, ordered by id.
    pub fn cash_entries(&self) -> impl Iterator<Item = &CashEntry> {
        self.cash_entries.values()
    }

    /// Appends a cash ledger entry with a freshly assigned id.
    #[allow(clippy::too_many_arguments)]
    pub fn insert_cash_entry(
        &mut self,
        date: NaiveDate,
        timestamp: DateTime<Utc>,
        flow: CashFlow,
        category: String,
        description: String,
        amount: Decimal,
        balance_after: Decimal,
        recorded_by: String,
    ) -> CashEntry {
        let id = CashEntryId::from_raw(Sequences::next(&mut self.sequences.cash_entry));
        let entry = CashEntry {
            id,
            date,
            timestamp,
            flow,
            category,
            description,
            amount,
            balance_after,
            recorded_by,
        };
        self.cash_entries.insert(id, entry.clone());
        entry
    }
}
