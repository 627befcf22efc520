//! Fixed prompt templates, one per tool (two for pitches)
//!
//! Placeholders are `{slot_name}`; see [`crate::prompt::Template`].

use crate::prompt::Template;

pub static PRESS_RELEASE: Template = Template::new(
    "press_release",
    r#"Actúa como un experto en relaciones públicas y comunicación corporativa con más de 20 años de experiencia trabajando con marcas de primer nivel. Tu tarea es redactar un comunicado de prensa profesional, claro, objetivo y bien estructurado.

**Información Base Proporcionada:**
{base_information}

**Instrucciones de Tono y Enfoque:**
- **Tono del comunicado:** {tone}
- **Medio de destino:** {target_media}. Adapta el lenguaje, la profundidad técnica y los ángulos de interés a este tipo de medio.

**Estructura Obligatoria del Comunicado:**
1.  **TÍTULO:** Atractivo, conciso y que resuma la noticia principal. Menos de 15 palabras.
2.  **SUBTÍTULO:** Informativo, que aporte un dato clave o contexto adicional.
3.  **ENTRADILLA (LEAD):** Primer párrafo. Debe responder a las 6 Ws del periodismo (Quién, Qué, Cuándo, Dónde, Por qué y Cómo) de forma clara y directa. No más de 50 palabras.
4.  **CUERPO DEL COMUNICADO:**
    - Desarrolla la información en orden de importancia (pirámide invertida).
    - Usa un lenguaje claro, preciso y libre de sesgos. Evita adjetivos subjetivos o frases editorializadas.
    - Incluye al menos una cita (quote) de un portavoz relevante. Si no se proporciona en la información base, crea una que sea coherente, potente y apropiada para el tono solicitado.
    - Inserta 2-3 intertítulos relevantes y optimizados para SEO que organicen el contenido y faciliten la lectura.
5.  **ACERCA DE [Nombre de la Marca]:** Un párrafo estándar (boilerplate) describiendo la empresa. Si no se proporciona, indica "[INSERTAR BOILERPLATE DE LA EMPRESA AQUÍ]".
6.  **CONTACTO DE PRENSA:**
    - Nombre: [Nombre de Contacto]
    - Cargo: [Cargo]
    - Email: [Email]
    - Teléfono: [Teléfono]

Mantén la veracidad como prioridad absoluta basándote únicamente en la información proporcionada. No hagas suposiciones infundadas. El objetivo final es crear un documento listo para ser enviado a periodistas.
"#,
);

macro_rules! pitch_header {
    () => {
        r#"Actúa como un PR estratega muy efectivo. Tu objetivo es captar la atención de un periodista para que se interese en un tema.

**Tema a presentar:**
{topic}

**Instrucciones de Tono y Enfoque:**
- **Tono:** {tone}
- **Medio de destino:** {target_media}
- **Formato de salida:** {output_format}

**Tarea:**
Redacta un mensaje breve y potente.

"#
    };
}

pub static PITCH_EMAIL: Template = Template::new(
    "pitch_email",
    concat!(
        pitch_header!(),
        r#"**Instrucciones para el email de presentación:**
- **Asunto:** Crea 3 opciones de asunto. Cortos, intrigantes y que eviten parecer spam.
- **Cuerpo del email:**
    - Saludo personalizado (ej: "Hola [Nombre del periodista],").
    - Gancho inicial: Una frase que conecte el tema con el área de cobertura del periodista o un tema de actualidad.
    - Pitch: Explica el tema de forma muy breve (2-3 frases), destacando por qué es noticioso o relevante para su audiencia. Menciona el valor único.
    - Llamada a la acción clara: Ofrecer más información, el comunicado completo, una entrevista, etc.
    - Despedida cordial.
"#
    ),
);

pub static PITCH_WHATSAPP: Template = Template::new(
    "pitch_whatsapp",
    concat!(
        pitch_header!(),
        r#"**Instrucciones para el mensaje de WhatsApp:**
- El mensaje debe ser muy corto, ideal para leerse en segundos.
- Empieza de forma directa y respetuosa.
- Presenta la noticia en una sola frase potente.
- Termina con una pregunta o llamada a la acción simple (ej: "¿Te interesa y te envío más info?", "¿Te parece si te comparto el comunicado?").
- Usa emojis de forma sutil y profesional solo si se seleccionó el tono "Amigable e informal".
"#
    ),
);

pub static TOPIC_ANALYSIS: Template = Template::new(
    "topic_analysis",
    r#"Actúa como un analista de medios y estratega de comunicación senior. Se te ha proporcionado una temática y tu trabajo es desglosarla para que un profesional de PR pueda entenderla rápidamente y proponerla a periodistas de forma efectiva.

**Temática a analizar:**
{topic}

**Tu análisis debe tener obligatoriamente las siguientes 3 secciones, usando formato Markdown para los títulos y listas:**

### 1. Glosario de Términos Clave
Identifica y define de forma sencilla los 5-7 términos más importantes relacionados con la temática. La definición debe ser clara y concisa, pensada para alguien que no es experto en el campo.

### 2. Enfoques Noticiosos Potenciales
Propón entre 3 y 5 ángulos o enfoques periodísticos distintos para abordar este tema. Para cada enfoque, explica brevemente por qué es interesante y qué tipo de historia se podría contar. Sé creativo y piensa en diferentes tipos de audiencias.
- **Enfoque 1 (Ej. Impacto Humano):** Explora cómo esta temática afecta la vida diaria de las personas.
- **Enfoque 2 (Ej. Innovación y Futuro):** Céntrate en el aspecto tecnológico y disruptivo.
- **Enfoque 3 (Ej. Perspectiva de Negocio):** Analiza las oportunidades de mercado, inversión y el impacto económico.
- **Enfoque 4 (Ej. Ángulo de Controversia/Ética):** Señala los posibles debates, riesgos o dilemas éticos asociados.

### 3. Perfiles de Medios y Periodistas Target
Sugiere 3 perfiles de medios de comunicación o tipos de periodistas a los que se les podría proponer este tema. Justifica cada sugerencia explicando por qué les interesaría y qué enfoque de los anteriores encajaría mejor con su línea editorial.
- **Perfil 1:** (Ej: "Periodistas de la sección de Tecnología en diarios generalistas como El País o La Vanguardia. Les interesará el enfoque de 'Innovación y Futuro' y cómo afecta al consumidor final.")
- **Perfil 2:** (Ej: "Redactores en revistas especializadas del sector [X], como [ejemplo de revista]. Buscarán los detalles técnicos y el 'Impacto de Negocio'.")
- **Perfil 3:** (Ej: "Productores de podcasts de actualidad o negocios. Se enfocarán en la 'historia humana' o en una entrevista profunda sobre la 'controversia'.")
"#,
);
