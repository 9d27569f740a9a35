//! Service transaction coordinator
//!
//! Records one completed service job: validates the payload, resolves the
//! customer/vehicle/parts, deducts stock, prices the job, and appends an
//! immutable record to the vehicle's history.
//!
//! Stock is never touched during resolution; all deductions go through
//! [`ProductRepository::deduct_stock`](crate::storage::ProductRepository::deduct_stock),
//! which validates every line before applying any, so a job that fails with
//! `InsufficientStock` leaves all quantities exactly as they were.

use chrono::{DateTime, Utc};

use crate::error::{GarageError, GarageResult};
use crate::models::{CustomerId, PartUsed, Product, ProductId, ServiceRecord, ServiceRecordId, VehicleId};
use crate::services::pricing::{price_service, PartLine};
use crate::storage::Storage;

/// What to do with a part line whose product id doesn't resolve
///
/// `Skip` drops unresolvable lines and records the rest of the job. `Reject`
/// fails the whole job with `NotFound` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPartPolicy {
    #[default]
    Skip,
    Reject,
}

/// One requested part line
///
/// Lines without a product id are ignored (blank rows on the service form).
#[derive(Debug, Clone)]
pub struct PartRequest {
    pub product_id: Option<ProductId>,
    pub quantity: u32,
}

/// Payload for recording a completed service job
#[derive(Debug, Clone)]
pub struct ServiceJobInput {
    /// When the service was performed
    pub date: DateTime<Utc>,
    /// Free-text service category
    pub service_type: String,
    /// Mechanic name
    pub mechanic: String,
    /// Labor amount
    pub service_charge: f64,
    /// Requested part lines
    pub parts: Vec<PartRequest>,
    /// Optional notes
    pub notes: Option<String>,
}

/// Service for recording completed jobs
pub struct ServiceJobService<'a> {
    storage: &'a Storage,
}

impl<'a> ServiceJobService<'a> {
    /// Create a new service job service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a completed service job against a customer's vehicle
    ///
    /// Returns the id of the newly appended service record.
    pub fn record_service(
        &self,
        customer_id: CustomerId,
        vehicle_id: VehicleId,
        input: ServiceJobInput,
        policy: UnresolvedPartPolicy,
    ) -> GarageResult<ServiceRecordId> {
        // Reject malformed input before any mutation
        if input.service_charge < 0.0 {
            return Err(GarageError::Validation(
                "Service charge cannot be negative".to_string(),
            ));
        }
        for part in &input.parts {
            if part.product_id.is_some() && part.quantity == 0 {
                return Err(GarageError::Validation(
                    "Part quantity must be at least 1".to_string(),
                ));
            }
        }

        let customer = self
            .storage
            .customers
            .get(customer_id)?
            .ok_or_else(|| GarageError::customer_not_found(customer_id.to_string()))?;

        if customer.find_vehicle(vehicle_id).is_none() {
            return Err(GarageError::vehicle_not_found(vehicle_id.to_string()));
        }

        // Resolve every line up front; no stock is touched here
        let resolved = self.resolve_parts(&input.parts, policy)?;

        // Deduct all lines atomically: all succeed or none are applied
        let deductions: Vec<(ProductId, u32)> =
            resolved.iter().map(|(p, qty)| (p.id, *qty)).collect();
        self.storage.products.deduct_stock(&deductions)?;

        // Snapshot part lines at current prices and price the job
        let parts_used: Vec<PartUsed> = resolved
            .iter()
            .map(|(product, qty)| PartUsed {
                product_id: product.id,
                quantity: *qty,
                cost_at_service: product.price,
                name: product.name.clone(),
            })
            .collect();

        let lines: Vec<PartLine> = resolved
            .iter()
            .map(|(product, qty)| PartLine {
                unit_price: product.price,
                gst_rate: product.gst_rate,
                quantity: *qty,
            })
            .collect();

        let breakdown = price_service(input.service_charge, &lines);

        let record = ServiceRecord {
            id: ServiceRecordId::new(),
            date: input.date,
            service_type: input.service_type,
            mechanic: input.mechanic,
            parts_used,
            service_charge: input.service_charge,
            gst_amount: breakdown.total_gst,
            total_cost: breakdown.grand_total,
            notes: input.notes.unwrap_or_default(),
        };
        let record_id = record.id;

        self.storage
            .customers
            .append_service_record(customer_id, vehicle_id, record)?;

        self.storage.products.save()?;
        self.storage.customers.save()?;

        Ok(record_id)
    }

    /// Resolve requested part lines to products per the unresolved-part policy
    fn resolve_parts(
        &self,
        parts: &[PartRequest],
        policy: UnresolvedPartPolicy,
    ) -> GarageResult<Vec<(Product, u32)>> {
        let mut resolved = Vec::new();

        for part in parts {
            let Some(product_id) = part.product_id else {
                continue;
            };

            match self.storage.products.get(product_id)? {
                Some(product) => resolved.push((product, part.quantity)),
                None => match policy {
                    UnresolvedPartPolicy::Skip => continue,
                    UnresolvedPartPolicy::Reject => {
                        return Err(GarageError::product_not_found(product_id.to_string()))
                    }
                },
            }
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GaragePaths;
    use crate::models::{Customer, Product, ProductCategory, Vehicle};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GaragePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed_customer(storage: &Storage) -> (CustomerId, VehicleId) {
        let mut customer = Customer::new("Rahul Sharma", "9876543210", None);
        let vehicle = Vehicle::new("KA-01-AB-1234", "Car - Sedan", "Hyundai Verna", Utc::now());
        let vehicle_id = vehicle.id;
        customer.vehicles.push(vehicle);
        let customer_id = customer.id;
        storage.customers.upsert(customer).unwrap();
        (customer_id, vehicle_id)
    }

    fn seed_product(storage: &Storage, name: &str, price: f64, quantity: u32) -> ProductId {
        let product = Product::new(name, ProductCategory::SparePart, "Bosch", price, 18.0, quantity, 2);
        let id = product.id;
        storage.products.upsert(product).unwrap();
        id
    }

    fn basic_input(parts: Vec<PartRequest>) -> ServiceJobInput {
        ServiceJobInput {
            date: Utc::now(),
            service_type: "General Service".to_string(),
            mechanic: "Raju Kumar".to_string(),
            service_charge: 2000.0,
            parts,
            notes: None,
        }
    }

    #[test]
    fn test_record_service_end_to_end() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 5);

        let service = ServiceJobService::new(&storage);
        let input = basic_input(vec![PartRequest {
            product_id: Some(oil),
            quantity: 2,
        }]);
        let record_id = service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap();

        // Stock deducted
        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 3);

        // Record appended with totals matching the pricing engine
        let customer = storage.customers.get(customer_id).unwrap().unwrap();
        let history = &customer.vehicles[0].service_history;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].id, record_id);

        let expected = price_service(
            2000.0,
            &[PartLine { unit_price: 850.0, gst_rate: 18.0, quantity: 2 }],
        );
        assert_eq!(history[0].gst_amount, expected.total_gst);
        assert_eq!(history[0].total_cost, expected.grand_total);
        assert_eq!(history[0].parts_used[0].cost_at_service, 850.0);
    }

    #[test]
    fn test_unknown_customer() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ServiceJobService::new(&storage);

        let err = service
            .record_service(
                CustomerId::new(),
                VehicleId::new(),
                basic_input(vec![]),
                UnresolvedPartPolicy::Skip,
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_vehicle() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, _) = seed_customer(&storage);
        let service = ServiceJobService::new(&storage);

        let err = service
            .record_service(
                customer_id,
                VehicleId::new(),
                basic_input(vec![]),
                UnresolvedPartPolicy::Skip,
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_insufficient_stock_leaves_state_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 20);
        let pads = seed_product(&storage, "Brake Pads (Front)", 1200.0, 1);

        let service = ServiceJobService::new(&storage);
        let input = basic_input(vec![
            PartRequest { product_id: Some(oil), quantity: 5 },
            PartRequest { product_id: Some(pads), quantity: 3 },
        ]);

        let err = service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap_err();
        assert!(err.is_insufficient_stock());

        // No deduction applied anywhere, no record appended
        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 20);
        assert_eq!(storage.products.get(pads).unwrap().unwrap().quantity, 1);
        let customer = storage.customers.get(customer_id).unwrap().unwrap();
        assert!(customer.vehicles[0].service_history.is_empty());
    }

    #[test]
    fn test_repeated_product_lines_over_request_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 5);

        let service = ServiceJobService::new(&storage);
        // Two lines for the same product; each fits alone, their sum does not
        let input = basic_input(vec![
            PartRequest { product_id: Some(oil), quantity: 3 },
            PartRequest { product_id: Some(oil), quantity: 3 },
        ]);

        let err = service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap_err();
        assert!(err.is_insufficient_stock());

        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 5);
        let customer = storage.customers.get(customer_id).unwrap().unwrap();
        assert!(customer.vehicles[0].service_history.is_empty());
    }

    #[test]
    fn test_repeated_product_lines_within_stock() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 5);

        let service = ServiceJobService::new(&storage);
        let input = basic_input(vec![
            PartRequest { product_id: Some(oil), quantity: 2 },
            PartRequest { product_id: Some(oil), quantity: 3 },
        ]);

        service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap();

        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 0);
        // Both lines are snapshotted on the record as entered
        let customer = storage.customers.get(customer_id).unwrap().unwrap();
        let record = &customer.vehicles[0].service_history[0];
        assert_eq!(record.parts_used.len(), 2);
        assert_eq!(record.parts_used.iter().map(|p| p.quantity).sum::<u32>(), 5);
    }

    #[test]
    fn test_unresolved_part_skip_policy() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 5);

        let service = ServiceJobService::new(&storage);
        let input = basic_input(vec![
            PartRequest { product_id: Some(oil), quantity: 1 },
            PartRequest { product_id: Some(ProductId::new()), quantity: 2 },
            PartRequest { product_id: None, quantity: 0 },
        ]);

        service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap();

        let customer = storage.customers.get(customer_id).unwrap().unwrap();
        let record = &customer.vehicles[0].service_history[0];
        // Only the resolvable line made it into the record
        assert_eq!(record.parts_used.len(), 1);
        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 4);
    }

    #[test]
    fn test_unresolved_part_reject_policy() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 5);

        let service = ServiceJobService::new(&storage);
        let input = basic_input(vec![
            PartRequest { product_id: Some(oil), quantity: 1 },
            PartRequest { product_id: Some(ProductId::new()), quantity: 2 },
        ]);

        let err = service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Reject)
            .unwrap_err();
        assert!(err.is_not_found());

        // Nothing was deducted
        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 5);
    }

    #[test]
    fn test_zero_quantity_rejected_before_mutation() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 5);

        let service = ServiceJobService::new(&storage);
        let input = basic_input(vec![PartRequest { product_id: Some(oil), quantity: 0 }]);

        let err = service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 5);
    }

    #[test]
    fn test_negative_service_charge_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);

        let service = ServiceJobService::new(&storage);
        let mut input = basic_input(vec![]);
        input.service_charge = -1.0;

        let err = service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_job_without_parts() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);

        let service = ServiceJobService::new(&storage);
        service
            .record_service(customer_id, vehicle_id, basic_input(vec![]), UnresolvedPartPolicy::Skip)
            .unwrap();

        let customer = storage.customers.get(customer_id).unwrap().unwrap();
        let record = &customer.vehicles[0].service_history[0];
        assert!(record.parts_used.is_empty());
        // Labor GST only
        assert_eq!(record.gst_amount, 360.0);
        assert_eq!(record.total_cost, 2360.0);
    }

    #[test]
    fn test_repeated_jobs_conserve_stock() {
        let (_temp_dir, storage) = create_test_storage();
        let (customer_id, vehicle_id) = seed_customer(&storage);
        let oil = seed_product(&storage, "Engine Oil 5W-40", 850.0, 5);

        let service = ServiceJobService::new(&storage);
        for _ in 0..5 {
            let input = basic_input(vec![PartRequest { product_id: Some(oil), quantity: 1 }]);
            service
                .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
                .unwrap();
        }

        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 0);

        // Sixth job must fail; stock can never go negative
        let input = basic_input(vec![PartRequest { product_id: Some(oil), quantity: 1 }]);
        let err = service
            .record_service(customer_id, vehicle_id, input, UnresolvedPartPolicy::Skip)
            .unwrap_err();
        assert!(err.is_insufficient_stock());
        assert_eq!(storage.products.get(oil).unwrap().unwrap().quantity, 0);
    }
}
