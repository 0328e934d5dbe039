use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use precifica_catalog::{
    Cost, CostId, CostKind, PricingSnapshot, Product, ProductCategory, ProductId, RawMaterial,
    RawMaterialId, Recipe, RecipeId, RecipeIngredient, StoredRates,
};
use precifica_core::RecordId;
use precifica_fiscal::{FiscalContext, Issuer, Locality, TaxRegime};
use precifica_pricing::{quote_product, Component, MarkupComponents, QuoteConfig};

/// Build a snapshot with `n` products (2/3 manufactured with recipes,
/// 1/3 outsourced) over a shared raw-material list and a handful of costs.
fn snapshot_with_products(n: usize) -> (PricingSnapshot, ProductId) {
    let materials: Vec<RawMaterial> = (0..10)
        .map(|i| RawMaterial {
            id: RawMaterialId::new(RecordId::new()),
            name: format!("Insumo {i}"),
            purchase_icms_rate: (i as f64) * 1.5,
        })
        .collect();

    let mut products = Vec::with_capacity(n);
    let mut recipes = Vec::new();
    for i in 0..n {
        let manufactured = i % 3 != 0;
        let id = ProductId::new(RecordId::new());
        products.push(Product {
            id,
            name: format!("Produto {i}"),
            category: if manufactured {
                ProductCategory::Manufactured
            } else {
                ProductCategory::Outsourced
            },
            monthly_sales: 50.0 + (i % 20) as f64,
            monthly_production: 60.0 + (i % 15) as f64,
            purchase_price: 8.0,
            purchase_icms_rate: 12.0,
            rates: StoredRates {
                icms: 12.0,
                pis: 1.65,
                cofins: 7.6,
                ..StoredRates::default()
            },
        });
        if manufactured {
            recipes.push(Recipe {
                id: RecipeId::new(RecordId::new()),
                product_id: id,
                batch_yield: 40.0,
                ingredients: materials
                    .iter()
                    .take(4)
                    .map(|m| RecipeIngredient {
                        raw_material_id: m.id,
                        quantity: 1.0 + (i % 5) as f64,
                        price_per_kg: 6.0,
                    })
                    .collect(),
            });
        }
    }

    let costs = vec![
        Cost {
            id: CostId::new(RecordId::new()),
            name: "Mão de obra".to_string(),
            kind: CostKind::Operational,
            monthly_values: [4000.0, 4000.0, 4000.0],
            average_override: None,
            vehicle: None,
        },
        Cost {
            id: CostId::new(RecordId::new()),
            name: "Aluguel".to_string(),
            kind: CostKind::Cash,
            monthly_values: [1500.0, 1500.0, 1500.0],
            average_override: None,
            vehicle: None,
        },
    ];

    let first = products[0].id;
    (
        PricingSnapshot {
            products,
            costs,
            recipes,
            raw_materials: materials,
        },
        first,
    )
}

fn config() -> QuoteConfig {
    QuoteConfig {
        fiscal: FiscalContext {
            regime: TaxRegime::LucroPresumido,
            locality: Locality::InState,
            issuer: Issuer::Romica,
        },
        components: MarkupComponents {
            margin: Component::Percent(10.0),
            freight: Component::Fixed(1.0),
            commission: Component::Percent(2.0),
        },
    }
}

fn bench_quote_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote_product");
    for size in [10usize, 100, 500] {
        let (snapshot, product_id) = snapshot_with_products(size);
        let cfg = config();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                quote_product(black_box(&snapshot), black_box(product_id), black_box(&cfg))
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quote_product);
criterion_main!(benches);
