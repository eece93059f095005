use minilearn::{Message, NaiveBayesClassifier};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Naive Bayes Spam Filter Example ===\n");

    let training_data = vec![
        Message::new("win a free prize now", true),
        Message::new("claim your free money today", true),
        Message::new("exclusive offer just for you", true),
        Message::new("free viagra click here", true),
        Message::new("meeting moved to 3pm tomorrow", false),
        Message::new("lunch on friday with the team", false),
        Message::new("here are the notes from the meeting", false),
        Message::new("can you review my pull request", false),
    ];

    let mut classifier = NaiveBayesClassifier::new();
    classifier.train(&training_data);

    println!(
        "Trained on {} messages, vocabulary size {}\n",
        training_data.len(),
        classifier.vocabulary_size()
    );

    let incoming = [
        "free money waiting for you",
        "notes from friday's meeting",
        "claim your exclusive prize",
        "review the meeting agenda",
    ];

    for text in incoming {
        let p_spam = classifier.predict(text)?;
        let verdict = if p_spam > 0.5 { "SPAM" } else { "ham " };
        println!("[{}] P(spam) = {:.3}  \"{}\"", verdict, p_spam, text);
    }

    Ok(())
}
