use rust_decimal::Decimal;
use transaction_analyzer::{process_transactions, InputFormat, Report, Transaction};

/// Helper to create a transaction with all fields
pub fn make_transaction(
    id: &str,
    tx_type: &str,
    amount: Option<Decimal>,
    to: &str,
    category: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        tx_type: tx_type.to_string(),
        amount,
        to: to.to_string(),
        category: category.to_string(),
        date: "2025-01-01".to_string(),
        out_of_range_amount: None,
    }
}

/// Helper to create a credit transaction
pub fn make_credit(id: &str, amount: Decimal, to: &str, category: &str) -> Transaction {
    make_transaction(id, "credit", Some(amount), to, category)
}

/// Helper to create a debit transaction
pub fn make_debit(id: &str, amount: Decimal, to: &str, category: &str) -> Transaction {
    make_transaction(id, "debit", Some(amount), to, category)
}

/// The three-record month used throughout the docs: salary in, two food orders out
pub fn sample_month() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "T1".to_string(),
            tx_type: "credit".to_string(),
            amount: Some(Decimal::from(5000)),
            to: "Salary".to_string(),
            category: "income".to_string(),
            date: "2025-01-01".to_string(),
            ..Default::default()
        },
        Transaction {
            id: "T2".to_string(),
            tx_type: "debit".to_string(),
            amount: Some(Decimal::from(200)),
            to: "Swiggy".to_string(),
            category: "food".to_string(),
            date: "2025-01-02".to_string(),
            ..Default::default()
        },
        Transaction {
            id: "T3".to_string(),
            tx_type: "debit".to_string(),
            amount: Some(Decimal::from(100)),
            to: "Swiggy".to_string(),
            category: "food".to_string(),
            date: "2025-01-03".to_string(),
            ..Default::default()
        },
    ]
}

/// Run input through the full pipeline and return the report with the JSON output
pub fn process_string(
    input: &str,
    format: InputFormat,
) -> Result<(Option<Report>, String), Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    let report = process_transactions(input.as_bytes(), format, &mut output)?;
    Ok((report, String::from_utf8(output)?))
}

/// Create a test CSV from (id, type, amount, to, category, date) rows
pub fn build_csv(rows: &[(&str, &str, &str, &str, &str, &str)]) -> String {
    let mut csv = String::from("id,type,amount,to,category,date\n");

    for (id, tx_type, amount, to, category, date) in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            id, tx_type, amount, to, category, date
        ));
    }

    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_make_credit() {
        let tx = make_credit("T1", dec!(50.25), "Salary", "income");
        assert_eq!(tx.id, "T1");
        assert_eq!(tx.tx_type, "credit");
        assert_eq!(tx.amount, Some(dec!(50.25)));
        assert_eq!(tx.to, "Salary");
    }

    #[test]
    fn test_build_csv() {
        let csv = build_csv(&[
            ("T1", "credit", "100.0", "Salary", "income", "2025-01-01"),
            ("T2", "debit", "", "Swiggy", "food", "2025-01-02"),
        ]);

        assert!(csv.starts_with("id,type,amount,to,category,date\n"));
        assert!(csv.contains("T1,credit,100.0,Salary,income,2025-01-01"));
        assert!(csv.contains("T2,debit,,Swiggy,food,2025-01-02"));
    }

    #[test]
    fn test_process_string() {
        let csv = "id,type,amount,to,category,date\nT1,credit,100,Salary,income,2025-01-01\n";
        let (report, output) = process_string(csv, InputFormat::Csv).unwrap();

        assert!(report.is_some());
        assert!(output.contains("\"totalCredit\""));
    }
}
