mod bigram_properties;
