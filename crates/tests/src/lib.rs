#[cfg(test)]
mod common;

#[cfg(test)]
mod upload_endpoint_tests;

#[cfg(test)]
mod complaint_create_tests;

#[cfg(test)]
mod health_tests;
