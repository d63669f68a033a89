mod common;

use common::asserts::{assert_preflight, assert_simple, assert_simple_rejected};
use common::builders::{monostore, preflight_request, simple_request};
use common::headers::header_value;
use monostore_web::OrderRequest;
use monostore_web::constants::{header, method, origin};
use std::sync::Arc;
use std::thread;

#[test]
fn cors_can_be_shared_across_threads() {
    let cors = Arc::new(monostore());
    let allowed = [origin::ANGULAR_STORE, origin::ANGULAR_ADMIN, origin::LOCAL_GATEWAY];

    let mut handles = Vec::new();
    for i in 0..8 {
        let cors = Arc::clone(&cors);
        let allowed_origin = allowed[i % allowed.len()];
        handles.push(thread::spawn(move || {
            let (headers, _status) = assert_preflight(
                preflight_request()
                    .origin(allowed_origin)
                    .request_method(method::POST)
                    .request_headers("Content-Type")
                    .check(&cors),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(allowed_origin),
            );

            let simple_headers =
                assert_simple(simple_request().origin(allowed_origin).check(&cors));
            assert_eq!(
                header_value(&simple_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(allowed_origin),
            );

            let stranger = format!("http://thread{i}.example");
            let rejection =
                assert_simple_rejected(simple_request().origin(stranger.as_str()).check(&cors));
            assert!(header_value(&rejection.headers, header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        }));
    }

    for handle in handles {
        handle.join().expect("thread panic");
    }
}

#[test]
fn order_validation_runs_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let body = format!(
                    r#"{{"shippingAddress":{{"street":"{i} Main St","city":"Springfield","zipCode":"1000{i}","country":"US"}},"paymentMethod":"card"}}"#
                );
                let order = OrderRequest::from_json(body.as_bytes()).expect("valid order");
                assert_eq!(order.shipping_address().zip_code, format!("1000{i}"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("thread panic");
    }
}
