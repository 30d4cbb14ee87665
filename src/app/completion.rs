use super::*;
use crate::certificate::Certificate;
use log::{info, warn};

impl QuizApp {
    /// Computes the outcome and, on a pass, unlocks the final slide.
    pub fn finish_quiz(&mut self, now: f64) {
        let Some(engine) = &self.engine else {
            return;
        };
        match engine.finish() {
            Ok(outcome) => {
                if outcome.unlocks_certificate() {
                    self.unlock_final(now);
                }
                self.outcome = Some(outcome);
                self.state = AppState::Results;
                self.message.clear();
            }
            Err(e) => {
                warn!("Cannot finish the quiz yet: {e}");
                self.message = format!("⚠ {e}");
            }
        }
    }

    fn unlock_final(&mut self, now: f64) {
        if !self.final_unlocked {
            info!("Final slide unlocked for {}", self.user_name);
        }
        self.final_unlocked = true;
        self.confetti = Some(Confetti::launch(now));
    }

    pub fn certificate(&self) -> Option<Certificate> {
        self.outcome
            .as_ref()
            .map(|outcome| Certificate::issued_today(&self.user_name, outcome))
    }

    /// Saves the certificate. Failures end up in the status message only.
    pub fn download_certificate(&mut self) {
        let Some(certificate) = self.certificate() else {
            self.message = "⚠ Finish the quiz first.".into();
            return;
        };

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.message = match certificate.save_in(std::path::Path::new(".")) {
                Ok(path) => format!("📄 Certificate saved to {}", path.display()),
                Err(e) => {
                    warn!("Certificate could not be saved: {e}");
                    format!("⚠ Certificate could not be saved: {e}")
                }
            };
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.message = match certificate.download_in_browser() {
                Ok(()) => format!("📄 Downloading {}", certificate.file_name()),
                Err(e) => {
                    warn!("Certificate download failed: {e}");
                    format!("⚠ Certificate could not be downloaded: {e}")
                }
            };
        }
    }
}
