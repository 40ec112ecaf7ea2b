//! Global CSS styles for Bento Popup.
//!
//! Dark wood cards with parchment text and brass trim.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* WOOD (Card surfaces, controls) */
  --walnut: #6d3f1f;
  --walnut-hover: #82502d;
  --wood-dark: #3b2412;

  /* BRASS (Borders, focus) */
  --brass: #b19768;
  --brass-light: #e4c98d;
  --amber-border: #92400e;

  /* PARCHMENT (Text) */
  --parchment: #f0d78c;
  --amber-100: #fef3c7;
  --amber-200: #fde68a;

  /* Typography */
  --font-serif: 'Cinzel', Georgia, serif;

  --shadow-emboss: 0 1px 2px rgba(0, 0, 0, 0.3);
  --shadow-card: 0 0 0 1px rgba(0, 0, 0, 0.2), 0 4px 8px rgba(0, 0, 0, 0.3),
    0 12px 24px rgba(0, 0, 0, 0.25);
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: #1c120a;
  font-family: var(--font-serif);
}

.visually-hidden {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0 0 0 0);
  white-space: nowrap;
}

/* === Popup === */
.popup {
  padding: 1rem;
}

.popup-title {
  font-size: 1.875rem;
  font-weight: 700;
  color: var(--amber-100);
  margin: 0 0 1rem;
}

/* === Bento Grid === */
.bento-grid {
  display: grid;
  width: 100%;
  grid-auto-rows: auto;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1rem;
}

.col-span-2 {
  grid-column: span 2 / span 2;
}

.bento-card {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  height: 100%;
  padding: 0.5rem;
  overflow: visible;
  border: 1px solid var(--amber-border);
  border-radius: 0.75rem;
  background: linear-gradient(160deg, var(--walnut), var(--wood-dark));
  box-shadow: var(--shadow-card);
  opacity: 0.9;
  transition: transform 300ms ease-in-out;
}

.bento-card__background {
  position: absolute;
  inset: 0;
  pointer-events: none;
  opacity: 0.6;
}

.bento-card__grain {
  width: 100%;
  height: 100%;
  border-radius: 0.75rem;
  background: repeating-linear-gradient(
    95deg,
    rgba(0, 0, 0, 0.06) 0 2px,
    transparent 2px 9px
  );
}

.bento-card__content {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  padding: 1rem;
  transition: transform 300ms;
}

.bento-card:hover .bento-card__content {
  transform: translateY(-2.5rem);
}

.bento-card__title {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--amber-100);
  margin: 0;
}

.bento-card__description {
  max-width: 32rem;
  color: var(--amber-200);
}

.bento-card__cta {
  color: var(--parchment);
  text-decoration: none;
}

.bento-card__cta:hover {
  color: var(--brass-light);
}

/* === URL Form === */
.url-form {
  min-width: 300px;
  margin-top: 0.5rem;
}

.url-form__row {
  display: flex;
  border-radius: 0.5rem;
  box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.input-field,
.suffix-select__input,
.btn-embossed {
  background: var(--walnut);
  color: var(--parchment);
  border: 2px solid var(--brass);
  box-shadow: var(--shadow-emboss);
  font-size: 1.125rem;
}

.input-field:focus,
.suffix-select__input:focus,
.btn-embossed:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--brass-light);
}

.url-form__fragment {
  margin-inline-end: -1px;
  padding: 0.5rem;
  border-radius: 0.5rem 0 0 0.5rem;
}

.suffix-select {
  position: relative;
  display: inline-flex;
}

.suffix-select__input {
  appearance: none;
  height: 100%;
  padding: 0 2.25rem 0 0.75rem;
  border-radius: 0 0.5rem 0.5rem 0;
}

.suffix-select__input:hover {
  background: var(--walnut-hover);
}

.suffix-select__chevron {
  position: absolute;
  inset-block: 0;
  right: 0;
  width: 2.25rem;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
  color: var(--brass-light);
}

/* === Buttons === */
.btn-primary,
.btn-embossed {
  cursor: pointer;
  font-family: inherit;
  font-weight: 600;
  border-radius: 0.25rem;
}

.btn-embossed {
  margin-left: 0.75rem;
  padding: 0.5rem 1rem;
}

.btn-embossed:hover {
  background: var(--walnut-hover);
  border-color: var(--brass-light);
}

.btn-primary {
  padding: 0.5rem 1rem;
  background: var(--parchment);
  color: var(--wood-dark);
  border: 1px solid var(--brass);
}

.gallery-trigger {
  margin-top: 1rem;
  align-self: flex-start;
}

.icon-btn {
  cursor: pointer;
  border: none;
}

.close-btn {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 50;
  width: 3rem;
  height: 3rem;
  font-size: 2rem;
  line-height: 1;
  border-radius: 9999px;
  background: var(--walnut);
  color: var(--parchment);
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
  transition: transform 150ms;
}

.close-btn:hover {
  background: var(--walnut-hover);
  transform: scale(1.1);
}

/* === Gallery Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 1000;
  background: rgba(0, 0, 0, 0.85);
  animation: fade-in 300ms ease-out;
}

.gallery-dialog {
  width: 100%;
  height: 100%;
  overflow-y: auto;
  padding: 1rem;
  background: linear-gradient(160deg, var(--walnut), var(--wood-dark));
}

.gallery-search {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  padding: 1rem;
}

.search-input {
  width: 80vw;
  padding: 0.5rem;
  font-size: 1.875rem;
  border-radius: 0.5rem;
  background: var(--parchment);
  color: #000;
  border: 2px solid var(--brass);
}

.search-input:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--brass-light);
}

.gallery-grid {
  margin-top: 4rem;
}

/* === Focus Cards === */
.focus-cards {
  display: grid;
  grid-template-columns: repeat(4, minmax(0, 1fr));
  gap: 1rem;
  padding: 1rem;
}

.focus-cards-empty {
  padding: 2rem;
  text-align: center;
  color: var(--brass-light);
  font-style: italic;
}

.focus-card {
  position: relative;
  overflow: hidden;
  border-radius: 0.5rem;
  background: #171717;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
  transition: all 300ms ease-out;
}

.focus-card.dimmed {
  filter: blur(4px);
  transform: scale(0.98);
}

.focus-card__caption {
  margin: 0 0 0.5rem;
  text-align: center;
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--brass-light);
}

.focus-card__img {
  display: block;
  width: 100%;
  height: 10rem;
  object-fit: cover;
}

.focus-card__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: flex-end;
  padding: 2rem 1rem;
  background: rgba(0, 0, 0, 0.5);
  opacity: 0;
  transition: opacity 300ms;
}

.focus-card__overlay.visible {
  opacity: 1;
}

.focus-card__title {
  font-size: 1.5rem;
  font-weight: 500;
  color: #fafafa;
}

@keyframes fade-in {
  from {
    opacity: 0;
  }
  to {
    opacity: 1;
  }
}

@media (max-width: 640px) {
  .focus-cards {
    grid-template-columns: repeat(2, minmax(0, 1fr));
  }

  .focus-card__img {
    height: 8rem;
  }
}
"#;
