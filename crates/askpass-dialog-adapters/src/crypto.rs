//! Passphrase-based wrapping of the wallet master key.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::{Algorithm, Argon2, Params, Version};
use hkdf::Hkdf;
use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use zeroize::Zeroizing;

use askpass_dialog_core::PortError;

const PBKDF2_ROUNDS: u32 = 600_000;
const WRAP_INFO: &[u8] = b"wallet_key_wrap_v1";

pub type MasterKey = Zeroizing<[u8; 32]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KdfAlgorithm {
    Argon2idV1,
    Pbkdf2HmacSha256V1,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KdfParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 65_536,
            iterations: 3,
            parallelism: 1,
        }
    }
}

/// Master key encrypted under a passphrase-derived key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedKey {
    pub kdf_algorithm: KdfAlgorithm,
    pub kdf_params: KdfParams,
    pub salt: [u8; 16],
    pub nonce: [u8; 12],
    pub ciphertext: Vec<u8>,
}

pub fn random_bytes<const N: usize>() -> Result<[u8; N], PortError> {
    let mut out = [0u8; N];
    getrandom::getrandom(&mut out)
        .map_err(|e| PortError::Crypto(format!("random generation failed: {e}")))?;
    Ok(out)
}

pub fn generate_master_key() -> Result<MasterKey, PortError> {
    Ok(Zeroizing::new(random_bytes::<32>()?))
}

pub fn wrap_key(
    master_key: &[u8; 32],
    passphrase: &[u8],
    params: KdfParams,
) -> Result<WrappedKey, PortError> {
    let salt = random_bytes::<16>()?;
    let nonce = random_bytes::<12>()?;
    let (root, kdf_algorithm) = derive_root_key(passphrase, &salt, params);
    let kek = expand_wrap_key(&root)?;

    let cipher = Aes256Gcm::new_from_slice(kek.as_slice())
        .map_err(|e| PortError::Crypto(format!("aes-gcm init failed: {e}")))?;
    let ciphertext = cipher
        .encrypt(&Nonce::<aes_gcm::aead::consts::U12>::from(nonce), master_key.as_slice())
        .map_err(|e| PortError::Crypto(format!("aes-gcm encrypt failed: {e}")))?;

    Ok(WrappedKey {
        kdf_algorithm,
        kdf_params: params,
        salt,
        nonce,
        ciphertext,
    })
}

/// Recovers the master key. A wrong passphrase fails GCM authentication.
pub fn unwrap_key(wrapped: &WrappedKey, passphrase: &[u8]) -> Result<MasterKey, PortError> {
    let root = match wrapped.kdf_algorithm {
        KdfAlgorithm::Argon2idV1 => argon2_root_key(passphrase, &wrapped.salt, wrapped.kdf_params)
            .ok_or_else(|| PortError::Crypto("argon2 derivation failed".to_owned()))?,
        KdfAlgorithm::Pbkdf2HmacSha256V1 => pbkdf2_root_key(passphrase, &wrapped.salt),
    };
    let kek = expand_wrap_key(&root)?;

    let cipher = Aes256Gcm::new_from_slice(kek.as_slice())
        .map_err(|e| PortError::Crypto(format!("aes-gcm init failed: {e}")))?;
    let plaintext = Zeroizing::new(
        cipher
            .decrypt(
                &Nonce::<aes_gcm::aead::consts::U12>::from(wrapped.nonce),
                wrapped.ciphertext.as_slice(),
            )
            .map_err(|_| PortError::IncorrectPassphrase)?,
    );

    let key: [u8; 32] = plaintext
        .as_slice()
        .try_into()
        .map_err(|_| PortError::Crypto("wrapped key has wrong length".to_owned()))?;
    Ok(Zeroizing::new(key))
}

fn expand_wrap_key(root: &[u8; 32]) -> Result<Zeroizing<[u8; 32]>, PortError> {
    let hk = Hkdf::<Sha256>::new(None, root);
    let mut out = Zeroizing::new([0u8; 32]);
    hk.expand(WRAP_INFO, out.as_mut_slice())
        .map_err(|_| PortError::Crypto("hkdf expand failed".to_owned()))?;
    Ok(out)
}

fn derive_root_key(
    passphrase: &[u8],
    salt: &[u8; 16],
    params: KdfParams,
) -> (Zeroizing<[u8; 32]>, KdfAlgorithm) {
    if let Some(root) = argon2_root_key(passphrase, salt, params) {
        return (root, KdfAlgorithm::Argon2idV1);
    }
    (pbkdf2_root_key(passphrase, salt), KdfAlgorithm::Pbkdf2HmacSha256V1)
}

fn argon2_root_key(
    passphrase: &[u8],
    salt: &[u8; 16],
    params: KdfParams,
) -> Option<Zeroizing<[u8; 32]>> {
    let params = Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        Some(32),
    )
    .ok()?;
    let mut root = Zeroizing::new([0u8; 32]);
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password_into(passphrase, salt, root.as_mut_slice())
        .ok()?;
    Some(root)
}

fn pbkdf2_root_key(passphrase: &[u8], salt: &[u8; 16]) -> Zeroizing<[u8; 32]> {
    let mut root = Zeroizing::new([0u8; 32]);
    pbkdf2_hmac::<Sha256>(passphrase, salt, PBKDF2_ROUNDS, root.as_mut_slice());
    root
}
