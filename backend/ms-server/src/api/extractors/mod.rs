pub mod ingress_auth;
