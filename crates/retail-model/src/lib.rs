pub mod enums;
pub mod processing;
pub mod records;

pub use enums::{Category, PaymentMethod};
pub use processing::{EntityCounts, Kpis, PipelineSummary};
pub use records::{
    Customer, Product, RawCustomer, RawProduct, RawTransaction, Transaction,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes() {
        let summary = PipelineSummary {
            output_dir: "output".into(),
            customers: EntityCounts::new(10, 8),
            products: EntityCounts::new(5, 5),
            transactions: EntityCounts::new(20, 17),
            kpis: Kpis {
                total_revenue: 123.5,
                avg_order_value: 7.25,
            },
        };
        let json = serde_json::to_string(&summary).expect("serialize summary");
        let round: PipelineSummary = serde_json::from_str(&json).expect("deserialize summary");
        assert_eq!(round.customers.after, 8);
        assert_eq!(round.transactions.dropped(), 3);
    }
}
