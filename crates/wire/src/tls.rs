//! Mutually authenticated TLS from PEM files.
//!
//! The server presents its chain and demands a client certificate that
//! chains to the configured client CA. Clients present their own chain and
//! verify the server against the configured server CA. Only the `ring`
//! provider is compiled in.
use anyhow::Context;
use rustls::ClientConfig;
use rustls::RootCertStore;
use rustls::ServerConfig;
use rustls::pki_types::CertificateDer;
use rustls::pki_types::PrivateKeyDer;
use rustls::pki_types::ServerName;
use rustls::server::WebPkiClientVerifier;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tokio_rustls::TlsAcceptor;
use tokio_rustls::TlsConnector;

/// All certificates in a PEM file, in order.
pub fn certs(path: &Path) -> anyhow::Result<Vec<CertificateDer<'static>>> {
    let ref mut reader = BufReader::new(
        File::open(path).with_context(|| format!("open certificate {}", path.display()))?,
    );
    let certs = rustls_pemfile::certs(reader)
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parse certificate {}", path.display()))?;
    match certs.is_empty() {
        true => Err(anyhow::anyhow!("no certificate in {}", path.display())),
        false => Ok(certs),
    }
}

/// The first private key in a PEM file (PKCS#1, PKCS#8, or SEC1).
pub fn key(path: &Path) -> anyhow::Result<PrivateKeyDer<'static>> {
    let ref mut reader =
        BufReader::new(File::open(path).with_context(|| format!("open key {}", path.display()))?);
    rustls_pemfile::private_key(reader)
        .with_context(|| format!("parse key {}", path.display()))?
        .ok_or_else(|| anyhow::anyhow!("no private key in {}", path.display()))
}

/// Trust anchors from a PEM bundle.
pub fn roots(path: &Path) -> anyhow::Result<RootCertStore> {
    let mut roots = RootCertStore::empty();
    for cert in certs(path)? {
        roots
            .add(cert)
            .with_context(|| format!("trust anchor in {}", path.display()))?;
    }
    Ok(roots)
}

/// Server side: present `cert`/`key`, require clients signed by `client_ca`.
pub fn acceptor(cert: &Path, key: &Path, client_ca: &Path) -> anyhow::Result<TlsAcceptor> {
    let verifier = WebPkiClientVerifier::builder(Arc::new(roots(client_ca)?))
        .build()
        .context("build client verifier")?;
    let config = ServerConfig::builder()
        .with_client_cert_verifier(verifier)
        .with_single_cert(certs(cert)?, self::key(key)?)
        .context("server certificate")?;
    Ok(TlsAcceptor::from(Arc::new(config)))
}

/// Client side: present `cert`/`key`, trust servers signed by `server_ca`.
pub fn connector(cert: &Path, key: &Path, server_ca: &Path) -> anyhow::Result<TlsConnector> {
    let config = ClientConfig::builder()
        .with_root_certificates(roots(server_ca)?)
        .with_client_auth_cert(certs(cert)?, self::key(key)?)
        .context("client certificate")?;
    Ok(TlsConnector::from(Arc::new(config)))
}

/// TLS name the client expects the server certificate to carry.
pub fn domain(name: &str) -> anyhow::Result<ServerName<'static>> {
    ServerName::try_from(name.to_string()).with_context(|| format!("invalid server name {}", name))
}
