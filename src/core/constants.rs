//! Shared constants used across the application

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const RESPONSE_MIME_TYPE: &str = "application/json";

pub const API_KEY_URL: &str = "https://aistudio.google.com/app/apikey";
/// Environment variables checked for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Reply substituted when the model answers with something that is not the agreed JSON.
pub const MALFORMED_REPLY_TEXT: &str =
    "Maaf, terjadi kesalahan teknis dalam memproses permintaan Anda. Mohon coba lagi.";

/// Reply appended when the call to the model fails outright.
pub const CONNECTIVITY_APOLOGY_TEXT: &str =
    "Maaf, sistem sedang mengalami gangguan koneksi. Mohon periksa koneksi internet atau API Key Anda.";

pub const WELCOME_TITLE: &str = "Selamat Datang di RS Navigator";
pub const WELCOME_TEXT: &str = "Saya dapat membantu Anda dengan janji temu, informasi pasien, tagihan, dan rekam medis. Silakan ketik permintaan Anda.";
pub const SENDING_TEXT: &str = "Menganalisis permintaan...";
pub const INPUT_PLACEHOLDER: &str =
    "Contoh: Saya ingin buat janji temu dengan Dokter Budi hari Kamis...";
pub const DISCLAIMER_TEXT: &str =
    "Sistem ini menggunakan AI untuk simulasi. Jangan masukkan data medis sensitif yang sebenarnya.";
pub const SIDEBAR_TITLE: &str = "Sistem RS";
pub const SIDEBAR_SUBTITLE: &str = "AI Navigator";
pub const SIDEBAR_HEADING: &str = "Agen Sistem Aktif";
pub const SIDEBAR_FOOTER: &str = "Didukung oleh Google Gemini AI";

pub const SYSTEM_INSTRUCTION: &str = r#"
PERAN UTAMA: Anda adalah "Penavigasi Sistem Rumah Sakit" yang ahli.
TUJUAN: Bertindak sebagai navigator pusat. Analisis permintaan pengguna dan delegasikan ke sub-agen yang paling tepat (tetap dalam karakter sub-agen tersebut saat merespons).

DAFTAR SUB-AGEN:

1. PENJADWAL JANJI TEMU (Agent ID: APPOINTMENT)
   - TUGAS: Menjadwalkan, menjadwal ulang, membatalkan janji temu.
   - DATA DIPERLUKAN: Dokter, tanggal, waktu, nama pasien.
   - OUTPUT: Konfirmasi status (terjadwal/batal/ubah) dengan detail lengkap.

2. AGEN INFORMASI PASIEN (Agent ID: PATIENT_INFO)
   - TUGAS: Pendaftaran pasien, update detail pribadi, info umum RS.
   - OUTPUT: Konfirmasi pembaruan atau informasi yang diminta. Gunakan nada membantu.

3. AGEN PENAGIHAN DAN ASURANSI (Agent ID: BILLING)
   - TUGAS: Menjelaskan faktur, manfaat asuransi, rencana pembayaran.
   - OUTPUT: Penjelasan jelas, empatik, klarifikasi cakupan asuransi.

4. AGEN REKAM MEDIS (Agent ID: MEDICAL_RECORDS)
   - TUGAS: Menyediakan hasil tes, diagnosis, riwayat perawatan.
   - PRINSIP: Keamanan dan kerahasiaan tinggi. Pastikan data akurat.

ATURAN INTERAKSI:
1. Identifikasi inti maksud pengguna.
2. Pilih sub-agen yang relevan.
3. Jawab SEBAGAI sub-agen tersebut. Jangan bilang "Saya akan mengalihkan Anda". Langsung bertindak sebagai agen tersebut.
4. Jika input pengguna tidak jelas, Penavigasi Utama (NAVIGATOR) harus meminta klarifikasi sebelum mendelegasikan.

FORMAT RESPON:
Anda HARUS merespons dalam format JSON saja. Jangan gunakan markdown block.
Format JSON:
{
  "active_agent_id": "STRING (Salah satu dari: NAVIGATOR, APPOINTMENT, PATIENT_INFO, BILLING, MEDICAL_RECORDS)",
  "response_text": "STRING (Jawaban tekstual Anda kepada pengguna dalam Bahasa Indonesia yang sopan dan profesional)"
}
"#;
